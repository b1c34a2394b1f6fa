use super::super::domain::{CaffeineIntake, RoomTemperature, SleepInput};

const MAX_RECOMMENDATIONS: usize = 4;
const MIN_RECOMMENDATIONS: usize = 2;

const BLUE_LIGHT_RECOMMENDATION_THRESHOLD_HOURS: f64 = 1.0;
const LATENCY_RECOMMENDATION_THRESHOLD_MINUTES: u32 = 30;
const SHORT_SLEEP_RECOMMENDATION_THRESHOLD_HOURS: f64 = 7.0;

/// Fallbacks appended when fewer than two targeted recommendations
/// matched, so even a near-perfect night gets actionable output.
const GENERIC_RECOMMENDATIONS: [&str; 2] = [
    "Keep a consistent wake time, including weekends, to anchor your circadian rhythm.",
    "Get bright outdoor light within an hour of waking to reinforce your sleep-wake cycle.",
];

/// Conditional tips evaluated in fixed declared order, truncated to at
/// most four matches, then backfilled to a minimum of two.
pub(crate) fn recommendations(input: &SleepInput) -> Vec<String> {
    let mut tips = Vec::new();

    if input.blue_light_exposure > BLUE_LIGHT_RECOMMENDATION_THRESHOLD_HOURS {
        tips.push(
            "Enable 'Night Shift' or stop screen use 90 mins before bed to protect melatonin \
             production."
                .to_string(),
        );
    }
    if input.environment.temperature != RoomTemperature::Optimal {
        tips.push(format!(
            "Your room is {}; aim for 65\u{b0}F (18\u{b0}C) for core temperature drop.",
            input.environment.temperature.label()
        ));
    }
    if matches!(
        input.caffeine_intake,
        CaffeineIntake::Moderate | CaffeineIntake::High
    ) {
        tips.push(
            "Caffeine has a 6-hour half-life; try a strict 'No Caffeine after 2 PM' rule."
                .to_string(),
        );
    }
    if input.latency > LATENCY_RECOMMENDATION_THRESHOLD_MINUTES {
        tips.push(
            "Try the 4-7-8 breathing technique or Progressive Muscle Relaxation to reduce sleep \
             latency."
                .to_string(),
        );
    }
    if input.duration < SHORT_SLEEP_RECOMMENDATION_THRESHOLD_HOURS {
        tips.push(
            "Prioritize a 'Sleep Buffer' by getting into bed 30 minutes earlier than your goal \
             time."
                .to_string(),
        );
    }

    tips.truncate(MAX_RECOMMENDATIONS);
    for filler in GENERIC_RECOMMENDATIONS {
        if tips.len() >= MIN_RECOMMENDATIONS {
            break;
        }
        tips.push(filler.to_string());
    }

    tips
}

/// Exactly three templated insights, always emitted; only the
/// parameter substitution varies with the input.
pub(crate) fn scientific_insights(input: &SleepInput) -> Vec<String> {
    let arousal = if input.blue_light_exposure > BLUE_LIGHT_RECOMMENDATION_THRESHOLD_HOURS {
        "circadian rhythm is delayed by blue light"
    } else {
        "nervous system may be in a state of hyperarousal"
    };

    vec![
        format!(
            "With a stress level of {}/10, your cortisol levels may be inhibiting the \
             transition into deep REM cycles.",
            input.stress_level
        ),
        format!(
            "A latency of {} mins suggests your {}.",
            input.latency, arousal
        ),
        format!(
            "Your environment noise level ({}) might be causing 'micro-awakenings' that \
             fragment your sleep architecture without you noticing.",
            input.environment.noise
        ),
    ]
}
