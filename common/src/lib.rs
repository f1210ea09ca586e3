//! # Kaprekar Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`numeral`]**: the fixed-width 4-digit [`numeral::Numeral`] value.
//! * **[`error`]**: input validation errors.
//! * **[`config`]**: run-time options collected from the command line.
//!
//! The logging macros ([`info!`], [`success!`], [`warn!`], [`error!`]) wrap
//! `tracing` so the terminal formatter can style each kind differently.

pub mod config;
pub mod error;
pub mod numeral;

#[doc(hidden)]
pub use tracing as __tracing;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "kaprekar::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "kaprekar::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "kaprekar::warn", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!(target: "kaprekar::error", $($arg)*)
    };
}
