use thiserror::Error;

use crate::numeral::Numeral;

/// Reasons a user-supplied string is not an analyzable numeral.
///
/// Every variant is an invalid-input condition: the caller reports it and
/// stops, nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected exactly 4 characters, got {len}")]
    WrongLength { len: usize },
    #[error("only the digits 0-9 are allowed")]
    NotDigits,
    #[error("{0} has all digits the same and never reaches 6174")]
    Repdigit(Numeral),
    #[error("{0} does not fit in 4 digits")]
    OutOfRange(u32),
}
