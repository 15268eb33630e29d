use super::table::{dinucleotide_delta_g, terminal_delta_g};
use thiserror::Error;

/// Length of the sub-window probed at each end of a candidate.
pub const END_PROBE_LENGTH: usize = 4;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ThermoError {
    #[error("Cannot compute delta G of an empty sequence")]
    EmptySequence,
    #[error("No thermodynamic parameter for symbol '{0}'")]
    InvalidSymbol(char),
    #[error("End probe of {probe} symbols does not fit in a window of {window} symbols")]
    ProbeExceedsWindow { probe: usize, window: usize },
}

/// Nearest-neighbor free energy (kcal/mol) of `subseq`.
///
/// The terminal value of the first base, plus the stack value of every overlapping
/// dinucleotide, plus the terminal value of the last base.
pub fn delta_g(subseq: &str) -> Result<f64, ThermoError> {
    if let Some(symbol) = subseq.chars().find(|c| terminal_delta_g(*c).is_none()) {
        return Err(ThermoError::InvalidSymbol(symbol));
    }

    // Every symbol is now a single ASCII byte, so byte offsets are char offsets.
    let bytes = subseq.as_bytes();
    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        return Err(ThermoError::EmptySequence);
    };

    let mut total =
        terminal_delta_g(first as char).ok_or(ThermoError::InvalidSymbol(first as char))?;
    for i in 0..bytes.len() - 1 {
        let pair = &subseq[i..i + 2];
        total += dinucleotide_delta_g(pair)
            .ok_or(ThermoError::InvalidSymbol(bytes[i + 1] as char))?;
    }
    total += terminal_delta_g(last as char).ok_or(ThermoError::InvalidSymbol(last as char))?;

    Ok(total)
}

/// Free energies of the 5' and 3' ends of a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndStability {
    pub five_prime: f64,
    pub three_prime: f64,
}

impl EndStability {
    /// Probes the first and last [`END_PROBE_LENGTH`] symbols of `window`.
    pub fn of(window: &str) -> Result<Self, ThermoError> {
        let exceeds = || ThermoError::ProbeExceedsWindow {
            probe: END_PROBE_LENGTH,
            window: window.len(),
        };
        let head = window.get(..END_PROBE_LENGTH).ok_or_else(exceeds)?;
        let tail = window
            .len()
            .checked_sub(END_PROBE_LENGTH)
            .and_then(|start| window.get(start..))
            .ok_or_else(exceeds)?;

        Ok(Self {
            five_prime: delta_g(head)?,
            three_prime: delta_g(tail)?,
        })
    }

    /// True when the 5' end is strictly less stable than the 3' end.
    #[inline]
    pub fn favors_five_prime(&self) -> bool {
        self.five_prime < self.three_prime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn delta_g_sums_terminals_and_stacks() {
        // 4.05 + GC(-9.36) + CA(-6.12) + AT(-3.67) + 4.31
        assert!(f64_approx_equal(delta_g("GCAT").unwrap(), -10.79));
        // 4.31 + AT(-3.67) + TC(-5.51) + CG(-9.07) + 4.05
        assert!(f64_approx_equal(delta_g("ATCG").unwrap(), -9.89));
    }

    #[test]
    fn delta_g_of_homopolymer_uses_repeated_stack() {
        // 4.31 + 3 * -4.26 + 4.31
        assert!(f64_approx_equal(delta_g("AAAA").unwrap(), -4.16));
        // 4.05 + GG + GC + CC + 4.05
        assert!(f64_approx_equal(delta_g("GGCC").unwrap(), -16.58));
    }

    #[test]
    fn delta_g_of_single_base_counts_terminal_twice() {
        assert!(f64_approx_equal(delta_g("A").unwrap(), 8.62));
        assert!(f64_approx_equal(delta_g("C").unwrap(), 8.10));
    }

    #[test]
    fn delta_g_of_two_bases_is_terminals_plus_one_stack() {
        assert!(f64_approx_equal(delta_g("CG").unwrap(), -0.97));
    }

    #[test]
    fn delta_g_rejects_empty_input() {
        assert_eq!(delta_g(""), Err(ThermoError::EmptySequence));
    }

    #[test]
    fn delta_g_rejects_symbols_outside_alphabet() {
        assert_eq!(delta_g("ACNT"), Err(ThermoError::InvalidSymbol('N')));
        assert_eq!(delta_g("acgt"), Err(ThermoError::InvalidSymbol('a')));
        assert_eq!(delta_g("AÜ"), Err(ThermoError::InvalidSymbol('Ü')));
    }

    #[test]
    fn end_stability_probes_first_and_last_four_symbols() {
        let ends = EndStability::of("GCATGCATCGATGCATCTA").unwrap();
        assert!(f64_approx_equal(ends.five_prime, -10.79));
        // Last four symbols are "TCTA".
        assert!(f64_approx_equal(ends.three_prime, delta_g("TCTA").unwrap()));
        assert!(f64_approx_equal(ends.three_prime, -4.79));
        assert!(ends.favors_five_prime());
    }

    #[test]
    fn end_stability_does_not_favor_equal_ends() {
        let ends = EndStability::of("GCATCGATCGATCGTGCAT").unwrap();
        assert!(f64_approx_equal(ends.five_prime, ends.three_prime));
        assert!(!ends.favors_five_prime());
    }

    #[test]
    fn end_stability_of_exact_probe_length_compares_window_with_itself() {
        let ends = EndStability::of("GCAT").unwrap();
        assert!(!ends.favors_five_prime());
    }

    #[test]
    fn end_stability_rejects_windows_shorter_than_probe() {
        assert_eq!(
            EndStability::of("GCA"),
            Err(ThermoError::ProbeExceedsWindow {
                probe: 4,
                window: 3
            })
        );
    }
}
