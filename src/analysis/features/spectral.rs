// Spectral module - Frequency-domain feature extraction
//
// This module computes spectral features from one-sided magnitude spectra.
// Frequencies are recovered from bin indices via the bin width
// sample_rate / frame_len, where frame_len is the time-domain window length.

/// Spectral feature computation functions
pub struct SpectralFeatures {
    sample_rate: u32,
}

impl SpectralFeatures {
    /// Create a new spectral features processor
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Compute the dominant frequency (amplitude peak-pick)
    ///
    /// Returns the frequency of the maximum-magnitude bin. Exact magnitude
    /// ties resolve to the lower bin.
    ///
    /// # Arguments
    /// * `spectrum` - One-sided magnitude spectrum
    /// * `frame_len` - Length of the time-domain window the spectrum came from
    ///
    /// # Returns
    /// Dominant frequency in Hz, in [0, sample_rate / 2]
    pub fn compute_dominant_frequency(&self, spectrum: &[f32], frame_len: usize) -> f32 {
        if spectrum.is_empty() || frame_len == 0 {
            return 0.0;
        }

        let freq_bin_width = self.sample_rate as f32 / frame_len as f32;

        let mut peak_bin = 0usize;
        let mut peak_mag = spectrum[0];
        for (i, &mag) in spectrum.iter().enumerate().skip(1) {
            if mag > peak_mag {
                peak_mag = mag;
                peak_bin = i;
            }
        }

        peak_bin as f32 * freq_bin_width
    }

    /// Compute spectral centroid (weighted mean frequency)
    ///
    /// Formula: centroid = Σ(f_i × |X[i]|) / Σ|X[i]|
    ///
    /// # Arguments
    /// * `spectrum` - One-sided magnitude spectrum
    /// * `frame_len` - Length of the time-domain window the spectrum came from
    ///
    /// # Returns
    /// Spectral centroid in Hz; 0.0 for an all-zero spectrum
    pub fn compute_centroid(&self, spectrum: &[f32], frame_len: usize) -> f32 {
        if frame_len == 0 {
            return 0.0;
        }

        let freq_bin_width = self.sample_rate as f32 / frame_len as f32;

        let weighted_sum: f32 = spectrum
            .iter()
            .enumerate()
            .map(|(i, &mag)| i as f32 * freq_bin_width * mag)
            .sum();

        let magnitude_sum: f32 = spectrum.iter().sum();

        if magnitude_sum > 1e-10 {
            weighted_sum / magnitude_sum
        } else {
            0.0
        }
    }
}
