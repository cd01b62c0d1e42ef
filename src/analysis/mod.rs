// Analysis module - feature extraction and cry classification pipeline
//
// This module wires the two core components together for the caller that
// polls audio on a fixed cadence:
//
// Pipeline: FeatureExtractor -> CryClassifier -> ClassificationResult
//
// The pipeline is synchronous and reentrant: it performs no I/O, spawns no
// work and shares no mutable state, so concurrent callers need no locking.
// Window acquisition and result display stay with the caller.

pub mod classifier;
pub mod features;

pub use classifier::{ClassificationResult, CryClassifier};
pub use features::{FeatureExtractor, Features};

use crate::config::AnalysisConfig;
use crate::error::FeatureError;

/// Analyzer runs the full per-window pipeline
pub struct Analyzer {
    feature_extractor: FeatureExtractor,
    classifier: CryClassifier,
    sample_rate: u32,
    window_len: usize,
}

impl Analyzer {
    /// Create an analyzer from startup configuration
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            feature_extractor: FeatureExtractor::new(config.sample_rate),
            classifier: CryClassifier::new(
                config.silence_rms_threshold,
                config.fallback_max_distance_hz,
            ),
            sample_rate: config.sample_rate,
            window_len: (config.sample_rate as f32 * config.window_secs) as usize,
        }
    }

    /// Configured sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Expected analysis window length in samples (sample_rate x window_secs)
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Analyze one audio window: extract features, then classify
    ///
    /// # Arguments
    /// * `buffer` - Mono window of samples at the configured sample rate
    ///
    /// # Returns
    /// * `Ok(ClassificationResult)` - Always produced for a valid buffer
    /// * `Err(FeatureError)` - Extraction failed; treat the cycle as "no signal"
    pub fn analyze(&self, buffer: &[f32]) -> Result<ClassificationResult, FeatureError> {
        let features = self.feature_extractor.extract(buffer)?;
        tracing::debug!(
            "Window features: zcr {:.3}, rms {:.4}, dominant {:.1} Hz, centroid {:.1} Hz",
            features.zero_crossing_rate,
            features.rms_energy,
            features.dominant_frequency,
            features.spectral_centroid
        );
        Ok(self.classifier.classify(&features))
    }
}
