//! Trait definitions for normalization components.

use crate::error::NormResult;

/// Text normalization trait.
///
/// Implementations rewrite raw input text into a form a speech synthesizer can
/// read aloud without seeing digit glyphs.
pub trait TextNormalizer: Send + Sync {
    /// Normalize the input text.
    ///
    /// # Arguments
    /// * `input` - Raw input text
    ///
    /// # Returns
    /// The fully normalized text. Fails as a whole if any number in the input
    /// cannot be converted.
    fn normalize(&self, input: &str) -> NormResult<String>;
}

/// Converts integers to words in one language.
pub trait NumeralConverter: Send + Sync + std::fmt::Debug {
    /// Spell out `num` as a cardinal numeral ("сорок два").
    fn cardinal(&self, num: i64) -> NormResult<String>;

    /// Spell out `num` as an ordinal numeral ("сорок второй").
    fn ordinal(&self, num: i64) -> NormResult<String>;
}
