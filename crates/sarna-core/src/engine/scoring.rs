use crate::core::models::candidate::{FLANK_LENGTH, FlankingContext};
use crate::core::models::sequence::Sequence;
use crate::core::utils::predicates::{base_at, count_tri_repeats, is_base_in};

pub const FIRST_BASE_GC_BONUS: i32 = 10;
pub const SECOND_BASE_GC_BONUS: i32 = 10;
pub const PENULTIMATE_BASE_AT_BONUS: i32 = 10;
pub const LAST_BASE_A_BONUS: i32 = 10;
pub const LAST_BASE_T_BONUS: i32 = 9;
pub const TRI_REPEAT_PENALTY: i32 = 10;

const STRONG_BASES: [char; 2] = ['G', 'C'];
const WEAK_BASES: [char; 2] = ['A', 'T'];

/// Per-rule contributions to a candidate's rank. Penalties are stored as negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankBreakdown {
    pub first_base: i32,
    pub second_base: i32,
    pub penultimate_base: i32,
    pub last_base: i32,
    pub tri_repeats: i32,
    pub flanking: i32,
}

impl RankBreakdown {
    #[inline]
    pub fn total(&self) -> i32 {
        self.first_base
            + self.second_base
            + self.penultimate_base
            + self.last_base
            + self.tri_repeats
            + self.flanking
    }
}

/// Bonus for a weak (A/T) base `k` positions downstream of the window, `k` in `1..=4`.
#[inline]
pub fn flanking_bonus(k: usize) -> i32 {
    (FLANK_LENGTH + 1).saturating_sub(k) as i32
}

/// Scores the window itself: positional bonuses and the tri-repeat penalty.
///
/// Positions are relative to the window's length, so the rules follow the window when its
/// length is configured away from 19.
pub fn score_window(window: &str) -> RankBreakdown {
    let len = window.len();
    let mut breakdown = RankBreakdown::default();

    if is_base_in(window, 0, &STRONG_BASES) {
        breakdown.first_base = FIRST_BASE_GC_BONUS;
    }
    if is_base_in(window, 1, &STRONG_BASES) {
        breakdown.second_base = SECOND_BASE_GC_BONUS;
    }
    if let Some(penultimate) = len.checked_sub(2) {
        if is_base_in(window, penultimate, &WEAK_BASES) {
            breakdown.penultimate_base = PENULTIMATE_BASE_AT_BONUS;
        }
    }
    breakdown.last_base = match len.checked_sub(1).and_then(|last| base_at(window, last)) {
        Some('A') => LAST_BASE_A_BONUS,
        Some('T') => LAST_BASE_T_BONUS,
        _ => 0,
    };
    breakdown.tri_repeats = -(count_tri_repeats(window) as i32) * TRI_REPEAT_PENALTY;

    breakdown
}

/// Sum of [`flanking_bonus`] over the weak bases present in `flanking`.
pub fn score_flanking(flanking: &FlankingContext) -> i32 {
    (1..=FLANK_LENGTH)
        .filter(|&k| flanking.at(k).is_some_and(|b| WEAK_BASES.contains(&b)))
        .map(flanking_bonus)
        .sum()
}

/// Full breakdown for a window and the bases that follow it.
pub fn score(window: &str, flanking: &FlankingContext) -> RankBreakdown {
    RankBreakdown {
        flanking: score_flanking(flanking),
        ..score_window(window)
    }
}

/// Captures up to [`FLANK_LENGTH`] symbols following the window at `offset`.
pub fn capture_flanking(
    sequence: &Sequence,
    offset: usize,
    window_length: usize,
) -> FlankingContext {
    FlankingContext::from_downstream(sequence.downstream(offset + window_length, FLANK_LENGTH))
}
