pub(crate) mod insights;
pub(crate) mod summary;

use super::domain::{Pillar, QualityLabel};
use serde::{Deserialize, Serialize};

/// The four pillar scores accompanying the composite Sleep Quality
/// Index, each already normalized to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarBreakdown {
    pub efficiency: u8,
    pub consistency: u8,
    pub environment: u8,
    pub lifestyle: u8,
}

impl PillarBreakdown {
    pub const fn get(&self, pillar: Pillar) -> u8 {
        match pillar {
            Pillar::Efficiency => self.efficiency,
            Pillar::Consistency => self.consistency,
            Pillar::Environment => self.environment,
            Pillar::Lifestyle => self.lifestyle,
        }
    }

    /// Pillar/value pairs in the fixed pillar order.
    pub fn entries(&self) -> [(Pillar, u8); 4] {
        Pillar::ordered().map(|pillar| (pillar, self.get(pillar)))
    }

    /// The pillar with the lowest score; on ties the first pillar in
    /// the fixed order wins.
    pub fn weakest(&self) -> Pillar {
        let mut weakest = Pillar::Efficiency;
        let mut lowest = self.get(weakest);
        for (pillar, value) in self.entries() {
            if value < lowest {
                weakest = pillar;
                lowest = value;
            }
        }
        weakest
    }
}

/// Engine output for one night of sleep data. Immutable once produced
/// and wire-compatible with the remote analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepReport {
    /// Composite Sleep Quality Index, 0..=100.
    pub score: u8,
    pub quality_label: QualityLabel,
    pub breakdown: PillarBreakdown,
    /// Names the weakest pillar as the primary area for improvement.
    pub summary: String,
    /// Between two and four actionable tips, in generation order.
    pub recommendations: Vec<String>,
    /// Always exactly three entries, in fixed order.
    pub scientific_insights: Vec<String>,
}
