//! # Kaprekar Core
//!
//! Pure computation over 4-digit numerals. Nothing in here prints or
//! touches the filesystem.
//!
//! * **[`routine`]**: a single Kaprekar step and the driver that iterates it
//!   until 6174, the `0000` collapse, or the iteration cap.
//! * **[`analyzer`]**: runs the driver over the whole domain and partitions
//!   the outcomes.
//! * **[`stats`]**: mean, maximum and histogram bins for reporting.

pub mod analyzer;
pub mod routine;
pub mod stats;

pub use analyzer::{BatchAnalysis, analyze_all};
pub use routine::{Failure, Step, StepResult, Trace, kaprekar_step, steps_to_constant};
