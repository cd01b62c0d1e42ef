// Temporal module - Time-domain feature extraction
//
// This module computes features directly from time-domain audio signals:
// zero-crossing rate and RMS energy.

/// Temporal feature computation functions
pub struct TemporalFeatures;

impl TemporalFeatures {
    pub fn new() -> Self {
        Self
    }

    /// Compute zero-crossing rate (ZCR)
    ///
    /// Fraction of adjacent-sample pairs whose signs differ, normalized by
    /// the number of pairs. High ZCR indicates noise-like or high-frequency
    /// content; low ZCR indicates tonal, low-frequency content.
    ///
    /// # Arguments
    /// * `audio` - Time-domain audio signal
    ///
    /// # Returns
    /// Zero-crossing rate (0.0 to 1.0)
    pub fn compute_zcr(&self, audio: &[f32]) -> f32 {
        if audio.len() < 2 {
            return 0.0;
        }

        let mut crossings = 0;
        for i in 1..audio.len() {
            if (audio[i] >= 0.0 && audio[i - 1] < 0.0) || (audio[i] < 0.0 && audio[i - 1] >= 0.0) {
                crossings += 1;
            }
        }

        crossings as f32 / (audio.len() - 1) as f32
    }

    /// Compute RMS energy
    ///
    /// Root-mean-square amplitude of the window, the loudness proxy that
    /// feeds the classifier's silence gate. Accumulates in f64 to keep long
    /// windows numerically stable.
    ///
    /// # Arguments
    /// * `audio` - Time-domain audio signal
    ///
    /// # Returns
    /// Non-negative RMS amplitude
    pub fn compute_rms(&self, audio: &[f32]) -> f32 {
        if audio.is_empty() {
            return 0.0;
        }

        let sum_squares: f64 = audio.iter().map(|&x| (x as f64) * (x as f64)).sum();
        (sum_squares / audio.len() as f64).sqrt() as f32
    }
}

impl Default for TemporalFeatures {
    fn default() -> Self {
        Self::new()
    }
}
