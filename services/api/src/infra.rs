use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use somnia::analysis::domain::bounds;
use somnia::analysis::{CaffeineIntake, RoomTemperature, SleepEnvironment, SleepInput};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Raw form payload as submitted by a client: numerics arrive as
/// unconstrained floats and enums as free-form strings, so a UI can
/// forward whatever the user typed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NightlyInputs {
    pub(crate) duration: f64,
    pub(crate) latency: f64,
    pub(crate) awakenings: f64,
    pub(crate) stress_level: f64,
    pub(crate) caffeine_intake: String,
    pub(crate) blue_light_exposure: f64,
    pub(crate) consistency: f64,
    pub(crate) environment: NightlyEnvironment,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NightlyEnvironment {
    pub(crate) noise: f64,
    pub(crate) light: f64,
    pub(crate) temperature: String,
}

/// Field-level validation for the raw payload: every numeric is
/// clamped to its documented domain and enums parse leniently, with
/// unrecognized values falling back to their penalty-free default.
pub(crate) fn collect_input(raw: &NightlyInputs) -> SleepInput {
    SleepInput {
        duration: clamp_float(
            raw.duration,
            bounds::DURATION_MIN_HOURS,
            bounds::DURATION_MAX_HOURS,
        ),
        latency: clamp_count(raw.latency, bounds::LATENCY_MAX_MINUTES),
        awakenings: clamp_count(raw.awakenings, bounds::AWAKENINGS_MAX),
        stress_level: clamp_scale(raw.stress_level),
        caffeine_intake: CaffeineIntake::from_wire(&raw.caffeine_intake),
        blue_light_exposure: clamp_float(
            raw.blue_light_exposure,
            0.0,
            bounds::BLUE_LIGHT_MAX_HOURS,
        ),
        consistency: clamp_scale(raw.consistency),
        environment: SleepEnvironment {
            noise: clamp_scale(raw.environment.noise),
            light: clamp_scale(raw.environment.light),
            temperature: RoomTemperature::from_wire(&raw.environment.temperature),
        },
    }
}

fn clamp_float(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}

fn clamp_count(value: f64, max: u32) -> u32 {
    clamp_float(value, 0.0, f64::from(max)).round() as u32
}

fn clamp_scale(value: f64) -> u8 {
    clamp_float(
        value,
        f64::from(bounds::SCALE_MIN),
        f64::from(bounds::SCALE_MAX),
    )
    .round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_night() -> NightlyInputs {
        NightlyInputs {
            duration: 7.5,
            latency: 15.0,
            awakenings: 1.0,
            stress_level: 4.0,
            caffeine_intake: "low".to_string(),
            blue_light_exposure: 0.5,
            consistency: 8.0,
            environment: NightlyEnvironment {
                noise: 2.0,
                light: 1.0,
                temperature: "optimal".to_string(),
            },
        }
    }

    #[test]
    fn collector_passes_in_domain_values_through() {
        let input = collect_input(&raw_night());
        assert_eq!(input.duration, 7.5);
        assert_eq!(input.latency, 15);
        assert_eq!(input.stress_level, 4);
        assert_eq!(input.caffeine_intake, CaffeineIntake::Low);
    }

    #[test]
    fn collector_clamps_out_of_range_numerics() {
        let mut raw = raw_night();
        raw.duration = -2.0;
        raw.latency = 1_000.0;
        raw.stress_level = 42.0;
        raw.environment.noise = 0.0;

        let input = collect_input(&raw);

        assert_eq!(input.duration, 3.0);
        assert_eq!(input.latency, 300);
        assert_eq!(input.stress_level, 10);
        assert_eq!(input.environment.noise, 1);
    }

    #[test]
    fn collector_defaults_unrecognized_enums() {
        let mut raw = raw_night();
        raw.caffeine_intake = "decaf-ish".to_string();
        raw.environment.temperature = "balmy".to_string();

        let input = collect_input(&raw);

        assert_eq!(input.caffeine_intake, CaffeineIntake::None);
        assert_eq!(input.environment.temperature, RoomTemperature::Optimal);
    }
}
