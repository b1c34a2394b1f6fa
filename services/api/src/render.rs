use crate::infra::{collect_input, NightlyEnvironment, NightlyInputs};
use clap::Args;
use somnia::analysis::{AnalysisProvider, LocalAnalysisProvider};
use somnia::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Hours asleep (3.0 to 14.0)
    #[arg(long, default_value_t = 7.5)]
    pub(crate) duration: f64,
    /// Minutes to fall asleep (0 to 300)
    #[arg(long, default_value_t = 15.0)]
    pub(crate) latency: f64,
    /// Times woken during the night (0 to 20)
    #[arg(long, default_value_t = 1.0)]
    pub(crate) awakenings: f64,
    /// Stress level (1 to 10)
    #[arg(long, default_value_t = 5.0)]
    pub(crate) stress: f64,
    /// Caffeine intake: none, low, moderate, or high
    #[arg(long, default_value = "low")]
    pub(crate) caffeine: String,
    /// Hours of screen time before bed (0 to 8)
    #[arg(long = "blue-light", default_value_t = 1.0)]
    pub(crate) blue_light: f64,
    /// Schedule regularity (1 to 10)
    #[arg(long, default_value_t = 7.0)]
    pub(crate) consistency: f64,
    /// Bedroom noise level (1 to 10)
    #[arg(long, default_value_t = 2.0)]
    pub(crate) noise: f64,
    /// Bedroom light level (1 to 10)
    #[arg(long, default_value_t = 2.0)]
    pub(crate) light: f64,
    /// Room temperature: cold, optimal, or hot
    #[arg(long, default_value = "optimal")]
    pub(crate) temperature: String,
    /// Emit the raw report as JSON instead of formatted text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let raw = NightlyInputs {
        duration: args.duration,
        latency: args.latency,
        awakenings: args.awakenings,
        stress_level: args.stress,
        caffeine_intake: args.caffeine,
        blue_light_exposure: args.blue_light,
        consistency: args.consistency,
        environment: NightlyEnvironment {
            noise: args.noise,
            light: args.light,
            temperature: args.temperature,
        },
    };

    let input = collect_input(&raw);
    let report = LocalAnalysisProvider.analyze(&input)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?
        );
        return Ok(());
    }

    println!(
        "Sleep Quality Index: {} ({})",
        report.score,
        report.quality_label.label()
    );
    println!();
    println!("Breakdown");
    for (pillar, value) in report.breakdown.entries() {
        println!("  {:<12} {:>3}  {}", pillar.label(), value, bar(value));
    }
    println!();
    println!("{}", report.summary);
    println!();
    println!("Recommendations");
    for (index, tip) in report.recommendations.iter().enumerate() {
        println!("  {}. {}", index + 1, tip);
    }
    println!();
    println!("Scientific insights");
    for insight in &report.scientific_insights {
        println!("  - {insight}");
    }

    Ok(())
}

fn bar(value: u8) -> String {
    let filled = usize::from(value) / 5;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

#[cfg(test)]
mod tests {
    use super::bar;

    #[test]
    fn bar_scales_to_twenty_cells() {
        assert_eq!(bar(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(bar(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }
}
