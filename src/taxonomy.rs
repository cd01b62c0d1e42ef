// Dunstan taxonomy - static cry-category configuration
//
// This module encodes the five-category Dunstan infant-cry scheme as an
// ordered, process-wide constant. The enumeration order is load-bearing:
// classification tie-breaks resolve to the first-enumerated category, so the
// table must stay an ordered sequence, never a map.

use serde::{Deserialize, Serialize};

/// The five Dunstan cry kinds, in fixed enumeration order
///
/// The order (neh, owh, heh, eairh, eh) decides exact-distance ties during
/// classification and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CryKind {
    /// "Neh" - hunger
    Neh,
    /// "Owh" - tiredness
    Owh,
    /// "Heh" - physical discomfort
    Heh,
    /// "Eairh" - lower-abdomen gas
    Eairh,
    /// "Eh" - need to burp
    Eh,
}

impl CryKind {
    /// Short lowercase key used in reports and logs
    pub fn key(&self) -> &'static str {
        match self {
            CryKind::Neh => "neh",
            CryKind::Owh => "owh",
            CryKind::Heh => "heh",
            CryKind::Eairh => "eairh",
            CryKind::Eh => "eh",
        }
    }
}

/// Inclusive dominant-frequency band associated with a cry kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    /// Lower band edge in Hz
    pub min_hz: f32,
    /// Upper band edge in Hz
    pub max_hz: f32,
}

impl FrequencyBand {
    pub const fn new(min_hz: f32, max_hz: f32) -> Self {
        Self { min_hz, max_hz }
    }

    /// Band membership test, inclusive on both edges
    pub fn contains(&self, hz: f32) -> bool {
        self.min_hz <= hz && hz <= self.max_hz
    }

    /// Band midpoint in Hz, the reference point for distance scoring
    pub fn midpoint(&self) -> f32 {
        (self.min_hz + self.max_hz) / 2.0
    }

    /// A band is well-formed when both edges are non-negative and min < max
    pub fn is_well_formed(&self) -> bool {
        self.min_hz >= 0.0 && self.min_hz < self.max_hz
    }
}

/// One entry of the cry taxonomy: kind, label, band and caregiving hint
#[derive(Debug, Clone, Copy)]
pub struct CryCategory {
    pub kind: CryKind,
    /// Label shown to the caregiver when this category matches
    pub display_name: &'static str,
    pub band: FrequencyBand,
    /// Caregiving suggestion returned as the classification message
    pub description: &'static str,
}

/// The full Dunstan table, in tie-break order
///
/// Band overlap between categories is expected; the midpoint-distance rule in
/// the classifier resolves it.
pub const DUNSTAN_TAXONOMY: [CryCategory; 5] = [
    CryCategory {
        kind: CryKind::Neh,
        display_name: "HUNGRY",
        band: FrequencyBand::new(250.0, 400.0),
        description: "\u{1F37C} Your baby is hungry",
    },
    CryCategory {
        kind: CryKind::Owh,
        display_name: "SLEEPY",
        band: FrequencyBand::new(200.0, 300.0),
        description: "\u{1F634} Your baby wants to sleep",
    },
    CryCategory {
        kind: CryKind::Heh,
        display_name: "UNCOMFORTABLE",
        band: FrequencyBand::new(300.0, 450.0),
        description: "\u{1F623} Change the diaper or adjust position",
    },
    CryCategory {
        kind: CryKind::Eairh,
        display_name: "GAS PAIN",
        band: FrequencyBand::new(350.0, 500.0),
        description: "\u{1F4A8} Your baby has gas pain",
    },
    CryCategory {
        kind: CryKind::Eh,
        display_name: "NEEDS BURPING",
        band: FrequencyBand::new(280.0, 380.0),
        description: "\u{1F931} Hold your baby upright to burp",
    },
];

/// Look up the taxonomy entry for a cry kind
pub fn category(kind: CryKind) -> &'static CryCategory {
    DUNSTAN_TAXONOMY
        .iter()
        .find(|c| c.kind == kind)
        .unwrap_or(&DUNSTAN_TAXONOMY[0])
}
