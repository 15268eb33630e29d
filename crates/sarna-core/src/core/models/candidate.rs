use std::fmt;

/// Number of downstream positions captured after every candidate window.
pub const FLANK_LENGTH: usize = 4;

/// Marker rendered for flanking positions that lie past the end of the sequence.
pub const ABSENT_SYMBOL: char = '-';

/// The symbols immediately downstream of a window.
///
/// Always holds exactly [`FLANK_LENGTH`] slots; slots beyond the end of the sequence are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlankingContext {
    slots: [Option<char>; FLANK_LENGTH],
}

impl FlankingContext {
    /// Builds a context from the symbols that follow a window. Anything past
    /// [`FLANK_LENGTH`] is ignored.
    pub fn from_downstream(downstream: &str) -> Self {
        let mut slots = [None; FLANK_LENGTH];
        for (slot, symbol) in slots.iter_mut().zip(downstream.chars()) {
            *slot = Some(symbol);
        }
        Self { slots }
    }

    #[inline]
    pub fn slots(&self) -> &[Option<char>; FLANK_LENGTH] {
        &self.slots
    }

    /// The symbol `k` positions after the window (1-based), if the sequence reaches that far.
    pub fn at(&self, k: usize) -> Option<char> {
        k.checked_sub(1)
            .and_then(|idx| self.slots.get(idx))
            .copied()
            .flatten()
    }

    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl fmt::Display for FlankingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(ABSENT_SYMBOL))?;
        }
        Ok(())
    }
}

/// A window that survived the filter pipeline, together with its rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 0-based start of the window in the source sequence. Doubles as generation order.
    pub offset: usize,
    pub target: String,
    pub flanking: FlankingContext,
    pub rank: i32,
}
