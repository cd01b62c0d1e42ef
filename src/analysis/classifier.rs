// CryClassifier - rule-based Dunstan cry classification
//
// This module maps a feature record to one of the five Dunstan categories
// using frequency-band reasoning over the dominant frequency:
//
// 1. Silence gate: RMS energy below threshold short-circuits to "no signal"
// 2. In-band pass: among categories whose band contains the dominant
//    frequency, the one with the nearest band midpoint wins
// 3. Fallback pass: with no containing band, the nearest midpoint over all
//    categories wins, accepted only strictly inside the fallback distance
// 4. Otherwise a diagnostic message reports the measured frequency
//
// Ties in either pass resolve to the first-enumerated category; the scan
// order over DUNSTAN_TAXONOMY is fixed for exactly that reason. Only RMS
// energy and dominant frequency participate in the decision today; ZCR and
// spectral centroid ride along in the record for future rules.
//
// Classification is total: there is no error path, and an uncertain result
// degrades to an informational message rather than a failure.

use crate::analysis::features::Features;
use crate::taxonomy::{category, CryCategory, CryKind, DUNSTAN_TAXONOMY};
use serde::{Deserialize, Serialize};

/// Default RMS threshold below which no frequency reasoning is attempted
pub const DEFAULT_SILENCE_RMS_THRESHOLD: f32 = 0.01;

/// Default maximum midpoint distance accepted by the fallback pass, in Hz
pub const DEFAULT_FALLBACK_MAX_DISTANCE_HZ: f32 = 100.0;

/// Outcome of one classification cycle
///
/// `matched` is `None` both for silence and for a confident "no match"; the
/// message distinguishes the two for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Matched cry kind, or `None` for silence / no confident match
    pub matched: Option<CryKind>,
    /// Display string: the category description, or an informational message
    pub message: String,
}

impl ClassificationResult {
    /// Caregiver-facing label of the matched category, if any
    pub fn display_name(&self) -> Option<&'static str> {
        self.matched.map(|kind| category(kind).display_name)
    }
}

/// CryClassifier applies the band/midpoint rules over the static taxonomy
///
/// The classifier is stateless per call: it reads only the immutable taxonomy
/// and its startup thresholds, so concurrent calls need no locking.
pub struct CryClassifier {
    taxonomy: &'static [CryCategory],
    silence_rms_threshold: f32,
    fallback_max_distance_hz: f32,
}

impl CryClassifier {
    /// Create a classifier with explicit thresholds
    ///
    /// # Arguments
    /// * `silence_rms_threshold` - RMS gate below which windows count as silence
    /// * `fallback_max_distance_hz` - Strict upper bound on accepted fallback distance
    pub fn new(silence_rms_threshold: f32, fallback_max_distance_hz: f32) -> Self {
        Self {
            taxonomy: &DUNSTAN_TAXONOMY,
            silence_rms_threshold,
            fallback_max_distance_hz,
        }
    }

    /// Create a classifier with the default thresholds
    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_SILENCE_RMS_THRESHOLD,
            DEFAULT_FALLBACK_MAX_DISTANCE_HZ,
        )
    }

    /// Classify one feature record
    ///
    /// Total over any well-formed record: always returns a result, never an
    /// error. Idempotent for identical inputs.
    ///
    /// # Arguments
    /// * `features` - Record produced by `FeatureExtractor::extract`
    pub fn classify(&self, features: &Features) -> ClassificationResult {
        if features.rms_energy < self.silence_rms_threshold {
            return ClassificationResult {
                matched: None,
                message: "\u{1F507} No sound detected".to_string(),
            };
        }

        let dominant = features.dominant_frequency;

        // Primary pass: categories whose band contains the dominant frequency,
        // scored by distance to the band midpoint. Strict `<` keeps the
        // first-enumerated category on exact ties.
        let mut best: Option<(&CryCategory, f32)> = None;
        for entry in self.taxonomy {
            if !entry.band.contains(dominant) {
                continue;
            }
            let distance = (dominant - entry.band.midpoint()).abs();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((entry, distance));
            }
        }

        // Fallback pass: nearest midpoint over all categories, accepted only
        // strictly inside the fallback distance
        if best.is_none() {
            for entry in self.taxonomy {
                let distance = (dominant - entry.band.midpoint()).abs();
                if distance >= self.fallback_max_distance_hz {
                    continue;
                }
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((entry, distance));
                }
            }
        }

        match best {
            Some((entry, distance)) => {
                tracing::debug!(
                    "Classified {:.1} Hz as {} (midpoint distance {:.1} Hz)",
                    dominant,
                    entry.kind.key(),
                    distance
                );
                ClassificationResult {
                    matched: Some(entry.kind),
                    message: entry.description.to_string(),
                }
            }
            None => ClassificationResult {
                matched: None,
                message: format!(
                    "\u{1F4CA} Still analyzing... (frequency: {:.0} Hz)",
                    dominant
                ),
            },
        }
    }
}

impl Default for CryClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
