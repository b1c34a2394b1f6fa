use serde::{Deserialize, Serialize};

/// Self-reported metrics for a single night/pattern, already validated
/// by the collecting layer. The scoring engine still clamps every field
/// to its documented domain before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepInput {
    /// Hours asleep, 3.0 to 14.0 in half-hour steps.
    pub duration: f64,
    /// Minutes to fall asleep, 0 to 300.
    pub latency: u32,
    /// Times woken during the night, 0 to 20.
    pub awakenings: u32,
    /// Self-rated stress, 1 to 10.
    pub stress_level: u8,
    pub caffeine_intake: CaffeineIntake,
    /// Hours of screen exposure before bed, 0.0 to 8.0.
    pub blue_light_exposure: f64,
    /// Self-rated schedule regularity, 1 to 10.
    pub consistency: u8,
    pub environment: SleepEnvironment,
}

/// Bedroom conditions during the night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepEnvironment {
    /// Noise level, 1 (silent) to 10.
    pub noise: u8,
    /// Light level, 1 (dark) to 10.
    pub light: u8,
    pub temperature: RoomTemperature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaffeineIntake {
    None,
    Low,
    Moderate,
    High,
}

impl CaffeineIntake {
    /// Lifestyle points deducted for this intake level.
    pub const fn penalty(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Low => 10.0,
            Self::Moderate => 25.0,
            Self::High => 40.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Lenient parse for wire values; anything unrecognized maps to the
    /// lowest-penalty intake rather than failing.
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomTemperature {
    Cold,
    Optimal,
    Hot,
}

impl RoomTemperature {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Optimal => "optimal",
            Self::Hot => "hot",
        }
    }

    /// Lenient parse for wire values; anything unrecognized maps to the
    /// penalty-free optimal band rather than failing.
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "cold" => Self::Cold,
            "hot" => Self::Hot,
            _ => Self::Optimal,
        }
    }
}

/// One of the four weighted sub-scores composing the Sleep Quality Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Efficiency,
    Consistency,
    Environment,
    Lifestyle,
}

impl Pillar {
    /// Fixed iteration order; ties for the weakest pillar resolve to the
    /// first entry encountered here.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Efficiency,
            Self::Consistency,
            Self::Environment,
            Self::Lifestyle,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Efficiency => "Efficiency",
            Self::Consistency => "Consistency",
            Self::Environment => "Environment",
            Self::Lifestyle => "Lifestyle",
        }
    }

    /// Human-readable phrase used when the summary names this pillar as
    /// the primary area for improvement.
    pub const fn focus_phrase(self) -> &'static str {
        match self {
            Self::Efficiency => "sleep efficiency",
            Self::Consistency => "schedule consistency",
            Self::Environment => "your bedroom environment",
            Self::Lifestyle => "daytime lifestyle habits",
        }
    }
}

/// Categorical band for a composite score, top band first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl QualityLabel {
    /// Step function over the composite score; bands are evaluated
    /// top-down and the first match wins.
    pub const fn from_score(score: u8) -> Self {
        if score >= 85 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else if score >= 50 {
            Self::Fair
        } else if score >= 30 {
            Self::Poor
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }
}

/// Documented domains for every bounded input field.
pub mod bounds {
    pub const DURATION_MIN_HOURS: f64 = 3.0;
    pub const DURATION_MAX_HOURS: f64 = 14.0;
    pub const LATENCY_MAX_MINUTES: u32 = 300;
    pub const AWAKENINGS_MAX: u32 = 20;
    pub const SCALE_MIN: u8 = 1;
    pub const SCALE_MAX: u8 = 10;
    pub const BLUE_LIGHT_MAX_HOURS: f64 = 8.0;
}

impl SleepInput {
    /// Copy of the input with every numeric field clamped to its
    /// documented domain. Non-finite floats collapse to the domain
    /// minimum so no NaN can reach the arithmetic below.
    pub fn clamped(&self) -> Self {
        Self {
            duration: clamp_finite(
                self.duration,
                bounds::DURATION_MIN_HOURS,
                bounds::DURATION_MAX_HOURS,
            ),
            latency: self.latency.min(bounds::LATENCY_MAX_MINUTES),
            awakenings: self.awakenings.min(bounds::AWAKENINGS_MAX),
            stress_level: self.stress_level.clamp(bounds::SCALE_MIN, bounds::SCALE_MAX),
            caffeine_intake: self.caffeine_intake,
            blue_light_exposure: clamp_finite(
                self.blue_light_exposure,
                0.0,
                bounds::BLUE_LIGHT_MAX_HOURS,
            ),
            consistency: self.consistency.clamp(bounds::SCALE_MIN, bounds::SCALE_MAX),
            environment: SleepEnvironment {
                noise: self
                    .environment
                    .noise
                    .clamp(bounds::SCALE_MIN, bounds::SCALE_MAX),
                light: self
                    .environment
                    .light
                    .clamp(bounds::SCALE_MIN, bounds::SCALE_MAX),
                temperature: self.environment.temperature,
            },
        }
    }
}

pub(crate) fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}
