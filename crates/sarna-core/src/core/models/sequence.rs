use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four symbols a [`Sequence`] may contain.
pub const NUCLEOTIDES: [char; 4] = ['A', 'T', 'G', 'C'];

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Invalid symbol '{symbol}' at position {position}; expected one of A, T, G, C")]
    InvalidSymbol { symbol: char, position: usize },
}

#[inline]
pub fn is_nucleotide(symbol: char) -> bool {
    matches!(symbol, 'A' | 'T' | 'G' | 'C')
}

/// An immutable nucleotide sequence over the alphabet {A, T, G, C}.
///
/// Validation happens once, at construction. Every window borrowed from a `Sequence` is
/// therefore guaranteed to be plain ASCII drawn from [`NUCLEOTIDES`], which lets the rest of
/// the crate index windows by byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    symbols: String,
}

impl Sequence {
    pub fn new(raw: impl Into<String>) -> Result<Self, SequenceError> {
        let symbols = raw.into();
        if let Some((position, symbol)) = symbols
            .chars()
            .enumerate()
            .find(|(_, c)| !is_nucleotide(*c))
        {
            return Err(SequenceError::InvalidSymbol { symbol, position });
        }
        Ok(Self { symbols })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of full-length windows of `window_length` that fit in the sequence.
    pub fn window_count(&self, window_length: usize) -> usize {
        if window_length == 0 || window_length > self.len() {
            0
        } else {
            self.len() - window_length + 1
        }
    }

    /// The window of `length` symbols starting at `offset`, if it fits entirely.
    pub fn window(&self, offset: usize, length: usize) -> Option<&str> {
        let end = offset.checked_add(length)?;
        self.symbols.get(offset..end)
    }

    /// Up to `count` symbols starting at `offset`; shorter (or empty) near the end.
    pub fn downstream(&self, offset: usize, count: usize) -> &str {
        let start = offset.min(self.len());
        let end = offset.saturating_add(count).min(self.len());
        &self.symbols[start..end]
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_sequence_over_nucleotide_alphabet() {
        let seq = Sequence::new("GATTACA").unwrap();
        assert_eq!(seq.as_str(), "GATTACA");
        assert_eq!(seq.len(), 7);
        assert!(!seq.is_empty());
    }

    #[test]
    fn new_accepts_empty_sequence() {
        let seq = Sequence::new("").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.window_count(19), 0);
    }

    #[test]
    fn new_reports_first_invalid_symbol_and_its_position() {
        let err = Sequence::new("ACGNTX").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidSymbol {
                symbol: 'N',
                position: 3
            }
        );
    }

    #[test]
    fn new_rejects_lowercase_symbols() {
        assert!(matches!(
            Sequence::new("ACGt"),
            Err(SequenceError::InvalidSymbol {
                symbol: 't',
                position: 3
            })
        ));
    }

    #[test]
    fn from_str_validates_like_new() {
        assert!("ACGT".parse::<Sequence>().is_ok());
        assert!("AC GT".parse::<Sequence>().is_err());
    }

    #[test]
    fn window_count_covers_every_full_length_offset() {
        let seq = Sequence::new("ACGTACGTAC").unwrap();
        assert_eq!(seq.window_count(4), 7);
        assert_eq!(seq.window_count(10), 1);
        assert_eq!(seq.window_count(11), 0);
        assert_eq!(seq.window_count(0), 0);
    }

    #[test]
    fn window_returns_none_when_it_would_run_past_the_end() {
        let seq = Sequence::new("ACGTACGT").unwrap();
        assert_eq!(seq.window(2, 4), Some("GTAC"));
        assert_eq!(seq.window(4, 4), Some("ACGT"));
        assert_eq!(seq.window(5, 4), None);
        assert_eq!(seq.window(usize::MAX, 4), None);
    }

    #[test]
    fn downstream_truncates_at_sequence_end() {
        let seq = Sequence::new("ACGTAC").unwrap();
        assert_eq!(seq.downstream(2, 4), "GTAC");
        assert_eq!(seq.downstream(4, 4), "AC");
        assert_eq!(seq.downstream(6, 4), "");
        assert_eq!(seq.downstream(10, 4), "");
    }

    #[test]
    fn display_writes_raw_symbols() {
        let seq = Sequence::new("TTAG").unwrap();
        assert_eq!(seq.to_string(), "TTAG");
    }
}
