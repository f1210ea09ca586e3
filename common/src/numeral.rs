//! # Numeral Model
//!
//! A numeral is a decimal value in `0..=9999` that is always handled as
//! exactly four digits. `42` and `"0042"` are the same numeral, and leading
//! zeros take part in every digit rearrangement.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

const WIDTH: usize = 4;

/// A fixed-width 4-digit decimal numeral.
///
/// Ordering follows the canonical padded form, which for a fixed width is
/// the same as integer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(u16);

impl Numeral {
    /// Kaprekar's constant.
    pub const KAPREKAR: Numeral = Numeral(6174);
    /// The degenerate state every repdigit collapses into.
    pub const ZERO: Numeral = Numeral(0);
    pub const MAX: u16 = 9999;
    /// Number of numerals in the domain, `0000` through `9999`.
    pub const DOMAIN_SIZE: usize = Self::MAX as usize + 1;

    /// Builds a numeral from its integer value.
    pub fn new(value: u16) -> Result<Self, InputError> {
        if value > Self::MAX {
            return Err(InputError::OutOfRange(value as u32));
        }
        Ok(Self(value))
    }

    /// Parses user input, rejecting repdigits on top of the format checks
    /// done by [`FromStr`].
    pub fn parse_input(s: &str) -> Result<Self, InputError> {
        let numeral: Numeral = s.parse()?;
        if numeral.is_repdigit() {
            return Err(InputError::Repdigit(numeral));
        }
        Ok(numeral)
    }

    /// Every numeral in ascending order, `0000` first.
    pub fn all() -> impl Iterator<Item = Numeral> {
        (0..=Self::MAX).map(Numeral)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Digits from most to least significant, each in `0..=9`.
    pub fn digits(self) -> [u8; WIDTH] {
        let v = self.0;
        [
            (v / 1000 % 10) as u8,
            (v / 100 % 10) as u8,
            (v / 10 % 10) as u8,
            (v % 10) as u8,
        ]
    }

    /// True when all four digits are identical (`0000`, `1111`, ...).
    pub fn is_repdigit(self) -> bool {
        let [first, rest @ ..] = self.digits();
        rest.iter().all(|&d| d == first)
    }

    /// The largest numeral formed by rearranging these digits.
    pub fn descending(self) -> Numeral {
        let mut digits = self.digits();
        digits.sort_unstable_by(|a, b| b.cmp(a));
        Self::from_digits(digits)
    }

    /// The smallest numeral formed by rearranging these digits, leading
    /// zeros included.
    pub fn ascending(self) -> Numeral {
        let mut digits = self.digits();
        digits.sort_unstable();
        Self::from_digits(digits)
    }

    fn from_digits(digits: [u8; WIDTH]) -> Numeral {
        Numeral(digits.iter().fold(0u16, |acc, &d| acc * 10 + d as u16))
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = WIDTH)
    }
}

impl FromStr for Numeral {
    type Err = InputError;

    /// Parses exactly four ASCII digits. Leading zeros are significant to
    /// the width check only: `"0042"` is accepted, `"42"` is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WIDTH {
            return Err(InputError::WrongLength { len });
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotDigits);
        }

        let value = s
            .bytes()
            .fold(0u16, |acc, b| acc * 10 + (b - b'0') as u16);
        Ok(Numeral(value))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_four_digits() {
        assert_eq!(Numeral::new(0).unwrap().to_string(), "0000");
        assert_eq!(Numeral::new(42).unwrap().to_string(), "0042");
        assert_eq!(Numeral::new(999).unwrap().to_string(), "0999");
        assert_eq!(Numeral::KAPREKAR.to_string(), "6174");
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Numeral::new(10_000), Err(InputError::OutOfRange(10_000)));
        assert!(Numeral::new(9999).is_ok());
        assert_eq!(Numeral::new(u16::MAX), Err(InputError::OutOfRange(65_535)));
    }

    #[test]
    fn test_from_str_full_parsing() {
        assert_eq!("0042".parse::<Numeral>(), Ok(Numeral(42)));
        assert_eq!("3524".parse::<Numeral>(), Ok(Numeral(3524)));

        // --- Error Cases ---

        assert_eq!(
            "42".parse::<Numeral>(),
            Err(InputError::WrongLength { len: 2 })
        );
        assert_eq!(
            "12345".parse::<Numeral>(),
            Err(InputError::WrongLength { len: 5 })
        );
        assert_eq!("".parse::<Numeral>(), Err(InputError::WrongLength { len: 0 }));
        assert_eq!("12a4".parse::<Numeral>(), Err(InputError::NotDigits));
        assert_eq!("-123".parse::<Numeral>(), Err(InputError::NotDigits));
        assert_eq!(" 123".parse::<Numeral>(), Err(InputError::NotDigits));

        // Multi-byte characters count once toward the width.
        assert_eq!("12é4".parse::<Numeral>(), Err(InputError::NotDigits));
    }

    #[test]
    fn test_parse_input_rejects_repdigits() {
        assert_eq!(
            Numeral::parse_input("1111"),
            Err(InputError::Repdigit(Numeral(1111)))
        );
        assert_eq!(
            Numeral::parse_input("0000"),
            Err(InputError::Repdigit(Numeral::ZERO))
        );
        assert_eq!(Numeral::parse_input("2111"), Ok(Numeral(2111)));
        assert!(matches!(
            Numeral::parse_input("999"),
            Err(InputError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_repdigit_detection() {
        let repdigits: Vec<Numeral> = Numeral::all().filter(|n| n.is_repdigit()).collect();
        assert_eq!(repdigits.len(), 10);
        assert_eq!(repdigits[0], Numeral::ZERO);
        assert_eq!(repdigits[9], Numeral(9999));
        assert!(!Numeral(1112).is_repdigit());
        assert!(!Numeral(100).is_repdigit());
    }

    #[test]
    fn test_permutations_keep_leading_zeros() {
        let n = Numeral(3524);
        assert_eq!(n.descending(), Numeral(5432));
        assert_eq!(n.ascending(), Numeral(2345));

        let n = Numeral(100);
        assert_eq!(n.descending().to_string(), "1000");
        assert_eq!(n.ascending().to_string(), "0001");
    }

    #[test]
    fn test_all_is_ascending_and_complete() {
        let all: Vec<Numeral> = Numeral::all().collect();
        assert_eq!(all.len(), Numeral::DOMAIN_SIZE);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all.last().map(|n| n.value()), Some(9999));
    }

    #[test]
    fn test_ordering_matches_canonical_string() {
        let a = Numeral(987);
        let b = Numeral(1000);
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }
}
