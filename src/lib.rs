// Cry Monitor Core - infant-cry analysis engine
// Dunstan-taxonomy classification from lightweight acoustic features

// Module declarations
pub mod analysis;
pub mod config;
pub mod error;
pub mod taxonomy;

// Re-exports for convenience
pub use analysis::{Analyzer, ClassificationResult, CryClassifier, FeatureExtractor, Features};
pub use config::{AnalysisConfig, AppConfig};
pub use error::FeatureError;
pub use taxonomy::{CryCategory, CryKind, FrequencyBand, DUNSTAN_TAXONOMY};
