use phf::{Map, phf_map};

/// Nearest-neighbor free-energy contributions (kcal/mol) for each ordered dinucleotide.
///
/// Complementary stacks share a value (e.g. `AA`/`TT`, `CA`/`TG`).
static DINUCLEOTIDE_DELTA_G: Map<&'static str, f64> = phf_map! {
    "AA" => -4.26, "TT" => -4.26,
    "AT" => -3.67,
    "TA" => -2.50,
    "CA" => -6.12, "TG" => -6.12,
    "GT" => -6.09, "AC" => -6.09,
    "AG" => -5.40, "CT" => -5.40,
    "GA" => -5.51, "TC" => -5.51,
    "CG" => -9.07,
    "GC" => -9.36,
    "GG" => -7.66, "CC" => -7.66,
};

/// Terminal (initiation) contributions (kcal/mol) for a single base at either end.
static TERMINAL_DELTA_G: Map<char, f64> = phf_map! {
    'A' => 4.31,
    'T' => 4.31,
    'G' => 4.05,
    'C' => 4.05,
};

#[inline]
pub fn dinucleotide_delta_g(pair: &str) -> Option<f64> {
    DINUCLEOTIDE_DELTA_G.get(pair).copied()
}

#[inline]
pub fn terminal_delta_g(base: char) -> Option<f64> {
    TERMINAL_DELTA_G.get(&base).copied()
}
