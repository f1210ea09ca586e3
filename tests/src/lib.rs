//! Shared fixtures for the integration tests.

use kaprekar_common::numeral::Numeral;

/// Frequency of each step count over the whole domain, repdigits excluded.
pub const KNOWN_DISTRIBUTION: [(u32, usize); 8] = [
    (0, 1),
    (1, 383),
    (2, 576),
    (3, 2400),
    (4, 1272),
    (5, 1518),
    (6, 1656),
    (7, 2184),
];

/// Parses a numeral literal, panicking on malformed test input.
pub fn numeral(s: &str) -> Numeral {
    s.parse()
        .unwrap_or_else(|e| panic!("bad numeral fixture {s:?}: {e}"))
}
