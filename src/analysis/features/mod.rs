// FeatureExtractor - DSP feature extraction for cry classification
//
// This module turns one fixed-duration mono audio buffer into the small set
// of cheap acoustic descriptors the classifier consumes. Extraction is a pure
// function of its input: nothing is retained across calls and the same buffer
// always yields the same record.
//
// Module organization:
// - types: Data structures (Features struct)
// - fft: One-sided magnitude spectrum computation
// - spectral: Frequency-domain features (dominant frequency, centroid)
// - temporal: Time-domain features (ZCR, RMS energy)
// - mod.rs: Coordinator (FeatureExtractor)

mod fft;
mod spectral;
mod temporal;
mod types;

pub use types::Features;

use crate::error::FeatureError;
use fft::FftProcessor;
use spectral::SpectralFeatures;
use temporal::TemporalFeatures;

/// FeatureExtractor coordinates the DSP feature extraction pipeline
pub struct FeatureExtractor {
    fft_processor: FftProcessor,
    spectral_features: SpectralFeatures,
    temporal_features: TemporalFeatures,
}

impl FeatureExtractor {
    /// Create a new FeatureExtractor for the given sample rate
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz (e.g., 16000)
    pub fn new(sample_rate: u32) -> Self {
        Self {
            fft_processor: FftProcessor::new(),
            spectral_features: SpectralFeatures::new(sample_rate),
            temporal_features: TemporalFeatures::new(),
        }
    }

    /// Extract all features from one analysis window
    ///
    /// Pipeline:
    /// 1. Validate the buffer (non-empty, all samples finite)
    /// 2. Compute time-domain features (ZCR, RMS)
    /// 3. Compute the one-sided magnitude spectrum
    /// 4. Compute frequency-domain features (dominant frequency, centroid)
    ///
    /// # Arguments
    /// * `audio` - Mono analysis window, nominal amplitude in [-1, 1]
    ///
    /// # Returns
    /// * `Ok(Features)` - Extracted feature record
    /// * `Err(FeatureError)` - Empty buffer or non-finite sample; the caller
    ///   should treat the cycle as "no signal"
    pub fn extract(&self, audio: &[f32]) -> Result<Features, FeatureError> {
        if audio.is_empty() {
            return Err(FeatureError::EmptyBuffer);
        }
        if let Some(index) = audio.iter().position(|s| !s.is_finite()) {
            return Err(FeatureError::NonFiniteSample { index });
        }

        let zero_crossing_rate = self.temporal_features.compute_zcr(audio);
        let rms_energy = self.temporal_features.compute_rms(audio);

        let spectrum = self.fft_processor.compute_magnitude_spectrum(audio);
        let dominant_frequency = self
            .spectral_features
            .compute_dominant_frequency(&spectrum, audio.len());
        let spectral_centroid = self.spectral_features.compute_centroid(&spectrum, audio.len());

        Ok(Features {
            zero_crossing_rate,
            rms_energy,
            dominant_frequency,
            spectral_centroid,
        })
    }
}
