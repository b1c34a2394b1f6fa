use crate::analysis::domain::{
    CaffeineIntake, RoomTemperature, SleepEnvironment, SleepInput,
};

/// A textbook night: every pillar perfect except lifestyle, which loses
/// twelve points to the stress term.
pub(crate) fn restful_night() -> SleepInput {
    SleepInput {
        duration: 7.0,
        latency: 10,
        awakenings: 0,
        stress_level: 3,
        caffeine_intake: CaffeineIntake::None,
        blue_light_exposure: 0.0,
        consistency: 10,
        environment: SleepEnvironment {
            noise: 1,
            light: 1,
            temperature: RoomTemperature::Optimal,
        },
    }
}

/// Every field at its most adverse bound; all four pillars clamp to zero.
pub(crate) fn worst_night() -> SleepInput {
    SleepInput {
        duration: 3.0,
        latency: 300,
        awakenings: 20,
        stress_level: 10,
        caffeine_intake: CaffeineIntake::High,
        blue_light_exposure: 8.0,
        consistency: 1,
        environment: SleepEnvironment {
            noise: 10,
            light: 10,
            temperature: RoomTemperature::Hot,
        },
    }
}
