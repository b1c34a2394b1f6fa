use somnia::analysis::{
    compute_sleep_report, CaffeineIntake, QualityLabel, RoomTemperature, SleepEnvironment,
    SleepInput,
};

fn night(
    duration: f64,
    latency: u32,
    awakenings: u32,
    stress: u8,
    caffeine: CaffeineIntake,
    blue_light: f64,
    consistency: u8,
    noise: u8,
    light: u8,
    temperature: RoomTemperature,
) -> SleepInput {
    SleepInput {
        duration,
        latency,
        awakenings,
        stress_level: stress,
        caffeine_intake: caffeine,
        blue_light_exposure: blue_light,
        consistency,
        environment: SleepEnvironment {
            noise,
            light,
            temperature,
        },
    }
}

fn sample_grid() -> Vec<SleepInput> {
    let mut inputs = Vec::new();
    for &duration in &[3.0, 5.5, 7.0, 9.5, 14.0] {
        for &latency in &[0, 25, 120, 300] {
            for &stress in &[1, 7, 10] {
                for &caffeine in &[CaffeineIntake::None, CaffeineIntake::High] {
                    inputs.push(night(
                        duration,
                        latency,
                        latency / 60,
                        stress,
                        caffeine,
                        f64::from(stress) * 0.5,
                        stress,
                        stress.min(10),
                        1,
                        RoomTemperature::Optimal,
                    ));
                }
            }
        }
    }
    inputs
}

#[test]
fn score_and_breakdown_stay_within_bounds_across_the_grid() {
    for input in sample_grid() {
        let report = compute_sleep_report(&input);

        assert!(report.score <= 100);
        for value in [
            report.breakdown.efficiency,
            report.breakdown.consistency,
            report.breakdown.environment,
            report.breakdown.lifestyle,
        ] {
            assert!(value <= 100);
        }
        assert_eq!(report.quality_label, QualityLabel::from_score(report.score));
        assert_eq!(report.scientific_insights.len(), 3);
        assert!((2..=4).contains(&report.recommendations.len()));
        assert!(!report.summary.is_empty());
    }
}

#[test]
fn more_awakenings_never_improve_efficiency() {
    let mut previous = u8::MAX;
    for awakenings in 0..=20 {
        let input = night(
            7.5,
            15,
            awakenings,
            4,
            CaffeineIntake::Low,
            1.0,
            7,
            3,
            2,
            RoomTemperature::Optimal,
        );
        let efficiency = compute_sleep_report(&input).breakdown.efficiency;
        assert!(efficiency <= previous);
        previous = efficiency;
    }
}

#[test]
fn more_stress_never_improves_lifestyle() {
    let mut previous = u8::MAX;
    for stress in 1..=10 {
        let input = night(
            8.0,
            10,
            1,
            stress,
            CaffeineIntake::Moderate,
            0.5,
            8,
            2,
            2,
            RoomTemperature::Optimal,
        );
        let lifestyle = compute_sleep_report(&input).breakdown.lifestyle;
        assert!(lifestyle <= previous);
        previous = lifestyle;
    }
}

#[test]
fn louder_rooms_never_improve_the_environment_pillar() {
    let mut previous = u8::MAX;
    for noise in 1..=10 {
        let input = night(
            8.0,
            10,
            1,
            4,
            CaffeineIntake::None,
            0.5,
            8,
            noise,
            2,
            RoomTemperature::Optimal,
        );
        let environment = compute_sleep_report(&input).breakdown.environment;
        assert!(environment <= previous);
        previous = environment;
    }
}

#[test]
fn identical_inputs_yield_byte_identical_reports() {
    let input = night(
        6.5,
        45,
        2,
        8,
        CaffeineIntake::Moderate,
        2.5,
        6,
        5,
        4,
        RoomTemperature::Hot,
    );

    let first = serde_json::to_string(&compute_sleep_report(&input)).expect("serializes");
    let second = serde_json::to_string(&compute_sleep_report(&input)).expect("serializes");

    assert_eq!(first, second);
}

#[test]
fn reports_round_trip_through_the_wire_shape() {
    let report = compute_sleep_report(&night(
        6.0,
        40,
        3,
        6,
        CaffeineIntake::Low,
        1.5,
        5,
        4,
        3,
        RoomTemperature::Cold,
    ));

    let json = serde_json::to_string(&report).expect("serializes");
    let parsed: somnia::analysis::SleepReport =
        serde_json::from_str(&json).expect("wire shape parses back");

    assert_eq!(parsed, report);
}
