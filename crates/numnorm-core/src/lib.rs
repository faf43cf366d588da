//! # numnorm-core
//!
//! Core error type and traits shared by the numnorm crates.
//!
//! - Unified error handling via `NormError`
//! - The `TextNormalizer` pipeline trait
//! - The `NumeralConverter` capability used to spell out integers

pub mod error;
pub mod traits;

pub use error::{NormError, NormResult};
pub use traits::{NumeralConverter, TextNormalizer};
