// FFT module - Fast Fourier Transform computation
//
// This module computes the one-sided magnitude spectrum of an analysis
// window. No windowing function is applied: the dominant-frequency feature is
// defined as the raw DFT amplitude peak with bin width sample_rate / N.

use rustfft::{num_complex::Complex, FftPlanner};
use std::sync::{Arc, Mutex};

/// FFT processor that computes magnitude spectra from audio windows
pub struct FftProcessor {
    fft_planner: Arc<Mutex<FftPlanner<f32>>>,
}

impl FftProcessor {
    pub fn new() -> Self {
        Self {
            fft_planner: Arc::new(Mutex::new(FftPlanner::new())),
        }
    }

    /// Compute the one-sided magnitude spectrum of `audio`
    ///
    /// The planner caches plans per transform length, so repeated calls with
    /// the fixed analysis window size reuse the same plan.
    ///
    /// # Arguments
    /// * `audio` - Time-domain window, any non-zero length
    ///
    /// # Returns
    /// Magnitude spectrum over positive frequencies (len = N / 2 + 1),
    /// covering 0 to sample_rate / 2 with bin width sample_rate / N
    pub fn compute_magnitude_spectrum(&self, audio: &[f32]) -> Vec<f32> {
        let n = audio.len();
        let mut buffer: Vec<Complex<f32>> = audio
            .iter()
            .map(|&sample| Complex::new(sample, 0.0))
            .collect();

        let mut planner = self.fft_planner.lock().unwrap();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        // Real input: the spectrum is symmetric, keep positive frequencies
        buffer[..n / 2 + 1].iter().map(|c| c.norm()).collect()
    }
}

impl Default for FftProcessor {
    fn default() -> Self {
        Self::new()
    }
}
