//! # text-normalizer
//!
//! Spells out numbers in Russian text for speech synthesis.
//!
//! The pipeline runs five stages in a fixed order, each feeding the next:
//! - Comma grouping (`1,234` -> `1234`)
//! - Currency amounts (`$1.01` -> `1 доллар 1 цент`)
//! - Decimal commas (`3,14` -> `3 запятая 14`)
//! - Ordinals (`5-й` -> `пятый`)
//! - Cardinals (`42` -> `сорок два`)
//!
//! Thousands separators are stripped before decimal commas are read, so a
//! comma inside a digit run such as `12,34` is taken as grouping and the run
//! becomes `1234`.
//!
//! # Example
//!
//! ```
//! use text_normalizer::normalize_numbers;
//!
//! let text = normalize_numbers("Курс: $1, 5-й этаж").unwrap();
//! assert_eq!(text, "Курс: один доллар, пятый этаж");
//! ```

mod currency;
mod num2words;
mod stages;

use std::sync::Arc;

use numnorm_core::{NormError, NormResult, NumeralConverter, TextNormalizer};
use once_cell::sync::Lazy;
use tracing::{debug, instrument};

pub use currency::{CurrencyTable, DETECTED_SYMBOLS, Inflection};
pub use num2words::{RussianNumerals, num_to_words_ru, ordinal_to_words_ru};
pub use stages::{
    CardinalStage, CommaGroupingStage, CurrencyStage, DecimalPointStage, OrdinalStage, Stage,
    default_stages, expand_currency,
};

static DEFAULT_NORMALIZER: Lazy<Normalizer> = Lazy::new(Normalizer::new);

/// Normalize every number in `text` with the default pipeline.
pub fn normalize_numbers(text: &str) -> NormResult<String> {
    DEFAULT_NORMALIZER.normalize(text)
}

/// Text after one stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTrace {
    /// Name of the stage that produced `text`.
    pub stage: String,
    /// Text after the stage ran.
    pub text: String,
}

/// Number normalizer with an ordered stage pipeline.
#[derive(Debug)]
pub struct Normalizer {
    stages: Vec<Box<dyn Stage>>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a new normalizer with the default stages and Russian numerals.
    pub fn new() -> Self {
        Self::with_numerals(Arc::new(RussianNumerals))
    }

    /// Create a normalizer with the default stages around another converter.
    pub fn with_numerals(numerals: Arc<dyn NumeralConverter>) -> Self {
        Self {
            stages: default_stages(numerals),
        }
    }

    /// Create a normalizer with custom stages.
    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn Stage>) {
        self.stages.push(stage);
    }

    /// Names of the stages in application order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run the pipeline and keep the text produced by every stage.
    #[instrument(level = "debug", skip(self), fields(input_len = input.len()))]
    pub fn trace(&self, input: &str) -> NormResult<Vec<StageTrace>> {
        let mut traces = Vec::with_capacity(self.stages.len());
        let mut text = input.to_string();

        for stage in &self.stages {
            text = run_stage(stage.as_ref(), &text)?;
            traces.push(StageTrace {
                stage: stage.name().to_string(),
                text: text.clone(),
            });
        }

        Ok(traces)
    }
}

impl TextNormalizer for Normalizer {
    #[instrument(level = "debug", skip(self), fields(input_len = input.len()))]
    fn normalize(&self, input: &str) -> NormResult<String> {
        let mut text = input.to_string();

        // Each stage sees the previous stage's output
        for stage in &self.stages {
            text = run_stage(stage.as_ref(), &text)?;
        }

        Ok(text)
    }
}

fn run_stage(stage: &dyn Stage, input: &str) -> NormResult<String> {
    let output = stage
        .apply(input)
        .map_err(|err| NormError::in_stage(stage.name(), err))?;
    debug!(
        stage = stage.name(),
        changed = output != input,
        "applied stage"
    );
    Ok(output)
}
