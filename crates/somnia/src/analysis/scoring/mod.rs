mod rules;

use super::domain::{QualityLabel, SleepInput};
use super::report::{insights, summary, PillarBreakdown, SleepReport};

/// Composite weights over the normalized pillar scores. Fixed by the
/// scoring model; callers get no knob to turn.
const EFFICIENCY_WEIGHT: f64 = 0.4;
const CONSISTENCY_WEIGHT: f64 = 0.2;
const ENVIRONMENT_WEIGHT: f64 = 0.2;
const LIFESTYLE_WEIGHT: f64 = 0.2;

/// Computes the Sleep Quality Index report for one night.
///
/// Pure and total: out-of-domain numerics are clamped to their nearest
/// boundary, every pillar and the composite land in 0..=100, and the
/// same input always yields an identical report.
pub fn compute_sleep_report(input: &SleepInput) -> SleepReport {
    let input = input.clamped();
    let values = rules::pillar_values(&input);

    let breakdown = PillarBreakdown {
        efficiency: normalize(values.efficiency),
        consistency: normalize(values.consistency),
        environment: normalize(values.environment),
        lifestyle: normalize(values.lifestyle),
    };

    let score = normalize(
        f64::from(breakdown.efficiency) * EFFICIENCY_WEIGHT
            + f64::from(breakdown.consistency) * CONSISTENCY_WEIGHT
            + f64::from(breakdown.environment) * ENVIRONMENT_WEIGHT
            + f64::from(breakdown.lifestyle) * LIFESTYLE_WEIGHT,
    );

    let quality_label = QualityLabel::from_score(score);
    let weakest = breakdown.weakest();

    SleepReport {
        score,
        quality_label,
        summary: summary::compose(quality_label, weakest),
        breakdown,
        recommendations: insights::recommendations(&input),
        scientific_insights: insights::scientific_insights(&input),
    }
}

/// Clamp to 0..=100 and round half-away-from-zero.
fn normalize(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as u8
}
