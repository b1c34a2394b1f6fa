use super::super::domain::SleepInput;

// Efficiency pillar.
pub(crate) const IDEAL_DURATION_MIN_HOURS: f64 = 7.0;
pub(crate) const IDEAL_DURATION_MAX_HOURS: f64 = 9.0;
pub(crate) const SHORT_SLEEP_PENALTY_PER_HOUR: f64 = 15.0;
pub(crate) const OVERSLEEP_PENALTY_PER_HOUR: f64 = 10.0;
pub(crate) const LATENCY_GRACE_MINUTES: f64 = 20.0;
pub(crate) const LATENCY_PENALTY_DIVISOR: f64 = 2.0;
pub(crate) const AWAKENING_PENALTY: f64 = 8.0;

// Consistency pillar.
pub(crate) const CONSISTENCY_SCALE_FACTOR: f64 = 10.0;
pub(crate) const HIGH_STRESS_THRESHOLD: u8 = 7;
pub(crate) const HIGH_STRESS_CONSISTENCY_PENALTY: f64 = 10.0;

// Environment pillar.
pub(crate) const ENVIRONMENT_LEVEL_PENALTY: f64 = 8.0;
pub(crate) const TEMPERATURE_PENALTY: f64 = 15.0;

// Lifestyle pillar.
pub(crate) const BLUE_LIGHT_PENALTY_PER_HOUR: f64 = 12.0;
pub(crate) const STRESS_LIFESTYLE_PENALTY: f64 = 4.0;

pub(crate) const PILLAR_BASELINE: f64 = 100.0;

/// Raw (unclamped) pillar values before normalization.
pub(crate) struct PillarValues {
    pub efficiency: f64,
    pub consistency: f64,
    pub environment: f64,
    pub lifestyle: f64,
}

/// Applies the fixed penalty rules to a domain-clamped input. Each
/// pillar starts from its baseline and only ever subtracts, so the
/// terms are order-insensitive.
pub(crate) fn pillar_values(input: &SleepInput) -> PillarValues {
    let mut efficiency = PILLAR_BASELINE;
    if input.duration < IDEAL_DURATION_MIN_HOURS {
        efficiency -= (IDEAL_DURATION_MIN_HOURS - input.duration) * SHORT_SLEEP_PENALTY_PER_HOUR;
    }
    if input.duration > IDEAL_DURATION_MAX_HOURS {
        efficiency -= (input.duration - IDEAL_DURATION_MAX_HOURS) * OVERSLEEP_PENALTY_PER_HOUR;
    }
    let latency = f64::from(input.latency);
    if latency > LATENCY_GRACE_MINUTES {
        efficiency -= (latency - LATENCY_GRACE_MINUTES) / LATENCY_PENALTY_DIVISOR;
    }
    efficiency -= f64::from(input.awakenings) * AWAKENING_PENALTY;

    let mut consistency = f64::from(input.consistency) * CONSISTENCY_SCALE_FACTOR;
    if input.stress_level > HIGH_STRESS_THRESHOLD {
        consistency -= HIGH_STRESS_CONSISTENCY_PENALTY;
    }

    let mut environment = PILLAR_BASELINE;
    environment -= f64::from(input.environment.noise - 1) * ENVIRONMENT_LEVEL_PENALTY;
    environment -= f64::from(input.environment.light - 1) * ENVIRONMENT_LEVEL_PENALTY;
    if input.environment.temperature != super::super::domain::RoomTemperature::Optimal {
        environment -= TEMPERATURE_PENALTY;
    }

    let mut lifestyle = PILLAR_BASELINE;
    lifestyle -= input.caffeine_intake.penalty();
    lifestyle -= input.blue_light_exposure * BLUE_LIGHT_PENALTY_PER_HOUR;
    lifestyle -= f64::from(input.stress_level) * STRESS_LIFESTYLE_PENALTY;

    PillarValues {
        efficiency,
        consistency,
        environment,
        lifestyle,
    }
}
