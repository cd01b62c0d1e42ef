// Error types for the cry analysis pipeline
//
// Feature extraction is the only fallible stage: classification is total by
// design and degrades to an informational "no match" message instead of
// failing the cycle. A failed extraction means the caller should treat the
// analysis cycle as "no signal", never crash.

use log::error;
use std::fmt;

/// Feature extraction failures
///
/// These cover the cases where numeric computation on an audio buffer cannot
/// produce a valid feature record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureError {
    /// The analysis buffer contained no samples
    EmptyBuffer,

    /// A sample was NaN or infinite; `index` is the first offending position
    NonFiniteSample { index: usize },
}

impl FeatureError {
    /// Human-readable error message
    pub fn message(&self) -> String {
        match self {
            FeatureError::EmptyBuffer => {
                "Cannot extract features from an empty audio buffer".to_string()
            }
            FeatureError::NonFiniteSample { index } => {
                format!(
                    "Audio buffer contains a non-finite sample at index {}",
                    index
                )
            }
        }
    }
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureError::{:?}: {}", self, self.message())
    }
}

impl std::error::Error for FeatureError {}

/// Log a feature extraction error with structured context
///
/// The caller decides whether a failed cycle is worth reporting; this helper
/// keeps the log format consistent wherever that happens.
pub fn log_feature_error(err: &FeatureError, context: &str) {
    error!(
        "Feature extraction error in {}: component=FeatureExtractor, message={}",
        context,
        err.message()
    );
}
