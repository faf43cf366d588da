//! Unified error types for number normalization.

/// Main error type for normalization operations.
#[derive(Debug, thiserror::Error)]
pub enum NormError {
    /// A digit string does not fit the numeral converter's integer type.
    #[error("number out of range: {0}")]
    NumberOutOfRange(String),

    /// The numeral converter cannot render the requested form.
    #[error("unsupported numeral: {0}")]
    UnsupportedNumeral(String),

    /// A pipeline stage failed.
    #[error("stage '{stage}' failed: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<NormError>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with NormError.
pub type NormResult<T> = Result<T, NormError>;

impl NormError {
    /// Create a number-out-of-range error with message.
    pub fn number_out_of_range(msg: impl Into<String>) -> Self {
        Self::NumberOutOfRange(msg.into())
    }

    /// Create an unsupported-numeral error with message.
    pub fn unsupported_numeral(msg: impl Into<String>) -> Self {
        Self::UnsupportedNumeral(msg.into())
    }

    /// Wrap an error with the name of the stage that produced it.
    pub fn in_stage(stage: impl Into<String>, source: NormError) -> Self {
        Self::Stage {
            stage: stage.into(),
            source: Box::new(source),
        }
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Strip any stage wrappers and return the underlying error.
    pub fn root_cause(&self) -> &NormError {
        match self {
            Self::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
