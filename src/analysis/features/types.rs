// Types module - Data structures for audio features

/// Features extracted from one analysis window
///
/// One record is produced per analysis cycle and handed to the classifier.
/// Records are call-local and never mutated after extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    /// Zero-crossing rate (0.0 to 1.0, normalized)
    ///
    /// Fraction of adjacent-sample sign changes across the window. Computed
    /// for future rules; the current classifier does not consult it.
    pub zero_crossing_rate: f32,

    /// RMS energy (non-negative loudness proxy)
    ///
    /// Root-mean-square amplitude of the window. Drives the silence gate.
    pub rms_energy: f32,

    /// Dominant frequency in Hz
    ///
    /// Frequency of the maximum-magnitude bin of the one-sided spectrum, in
    /// [0, sample_rate / 2]. This is an amplitude peak-pick, not a pitch
    /// estimator: the loudest spectral component wins, noise included. That
    /// trade keeps extraction cheap enough for every polling cycle.
    pub dominant_frequency: f32,

    /// Spectral centroid in Hz (weighted mean frequency)
    ///
    /// "Center of mass" of spectral energy, a smoother complement to the
    /// dominant-frequency peak-pick. Computed for future rules; the current
    /// classifier does not consult it.
    pub spectral_centroid: f32,
}
