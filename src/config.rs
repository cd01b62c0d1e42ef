//! Configuration management for analysis parameters
//!
//! This module provides startup configuration loading from JSON files. The
//! values are treated as process constants: they are read once and handed to
//! the analyzer, never mutated at runtime.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
}

/// Analysis pipeline parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Audio sample rate in Hz
    pub sample_rate: u32,
    /// Analysis window duration in seconds
    pub window_secs: f32,
    /// RMS threshold below which a window counts as silence
    pub silence_rms_threshold: f32,
    /// Strict upper bound on the nearest-center fallback distance, in Hz
    pub fallback_max_distance_hz: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            // Low sample rate keeps the per-cycle FFT cheap
            sample_rate: 16000,
            window_secs: 0.5,
            silence_rms_threshold: 0.01,
            fallback_max_distance_hz: 100.0,
        }
    }
}

impl Default for AppConfig {
    /// Default configuration values (fallback if config file not found)
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// Loaded configuration, or defaults (with a logged warning) when the
    /// file is missing or malformed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        Self::load_from_file("assets/analysis_config.json")
    }
}
