//! Composition predicates evaluated on a single window.
//!
//! Windows passed here come from a validated [`Sequence`](crate::core::models::sequence::Sequence),
//! so every symbol is one ASCII byte.

use crate::core::models::sequence::NUCLEOTIDES;

pub const GC_PERCENT_MIN: usize = 40;
pub const GC_PERCENT_MAX: usize = 60;

/// Length of a homopolymer stretch counted as a tri-repeat.
pub const TRI_REPEAT_LENGTH: usize = 3;

fn gc_count(window: &str) -> usize {
    window.chars().filter(|c| matches!(c, 'G' | 'C')).count()
}

/// Percentage of G and C symbols, using the window's own length as the denominator.
pub fn gc_percentage(window: &str) -> f64 {
    let len = window.chars().count();
    if len == 0 {
        return 0.0;
    }
    gc_count(window) as f64 / len as f64 * 100.0
}

/// True when the GC percentage lies within `[40, 60]`, inclusive.
///
/// Compared in integer arithmetic, so a window sitting exactly on a bound is accepted.
pub fn gc_content(window: &str) -> bool {
    let len = window.chars().count();
    if len == 0 {
        return false;
    }
    let scaled = gc_count(window) * 100;
    (GC_PERCENT_MIN * len..=GC_PERCENT_MAX * len).contains(&scaled)
}

/// Length of the longest stretch of identical consecutive symbols.
pub fn longest_run(window: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for symbol in window.chars() {
        if previous == Some(symbol) {
            current += 1;
        } else {
            current = 1;
            previous = Some(symbol);
        }
        longest = longest.max(current);
    }
    longest
}

/// True when some nucleotide repeats `run_length` or more times in a row.
pub fn has_long_run(window: &str, run_length: usize) -> bool {
    let mut current = 0;
    let mut previous = None;
    for symbol in window.chars() {
        if previous == Some(symbol) {
            current += 1;
        } else {
            current = 1;
            previous = Some(symbol);
        }
        if current >= run_length && NUCLEOTIDES.contains(&symbol) {
            return true;
        }
    }
    false
}

/// Non-overlapping occurrences of `AAA`, `TTT`, `GGG` and `CCC`, summed.
///
/// Each homopolymer is scanned left to right independently; a match resumes the scan after
/// the matched run, so `AAAAAA` counts twice and `AAAAA` once.
pub fn count_tri_repeats(window: &str) -> usize {
    NUCLEOTIDES
        .iter()
        .map(|&base| {
            let needle: String = std::iter::repeat_n(base, TRI_REPEAT_LENGTH).collect();
            window.matches(needle.as_str()).count()
        })
        .sum()
}

/// The symbol at 0-based `index`, or `None` when the index is out of bounds.
#[inline]
pub fn base_at(window: &str, index: usize) -> Option<char> {
    window.as_bytes().get(index).map(|&b| b as char)
}

/// True when the symbol at `index` is one of `targets`.
#[inline]
pub fn is_base_in(window: &str, index: usize, targets: &[char]) -> bool {
    base_at(window, index).is_some_and(|b| targets.contains(&b))
}
