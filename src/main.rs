//! Interest Projection CLI
//!
//! Command-line front end for running a single projection

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use interest_projection::calculator::{Calculator, CalculatorConfig, Rendering, DEFAULT_CHART_POINTS};
use interest_projection::export::write_csv;
use interest_projection::format::{format_amount, format_axis_label, Language};
use interest_projection::input::{Granularity, InterestMode, ProjectionInput};

#[derive(Debug, Parser)]
#[command(name = "interest_projection", version, about = "Project simple or compound interest")]
struct Args {
    /// Initial amount
    principal: String,

    /// Annual interest rate in percent
    rate: String,

    /// Duration in years
    years: String,

    /// Compound interest instead of simple
    #[arg(long)]
    compound: bool,

    /// Count periods in months instead of years
    #[arg(long)]
    monthly: bool,

    /// Maximum number of chart points
    #[arg(long, default_value_t = DEFAULT_CHART_POINTS)]
    points: usize,

    /// Output language (es, en)
    #[arg(long, default_value_t = Language::Spanish)]
    lang: Language,

    /// Print the rendering as JSON
    #[arg(long)]
    json: bool,

    /// Write the full series to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Also show totals for every mode and granularity
    #[arg(long)]
    compare: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let config = CalculatorConfig {
        sample_points: args.points,
        language: args.lang,
        ..Default::default()
    };
    let input = ProjectionInput::new(
        args.principal.as_str(),
        args.rate.as_str(),
        args.years.as_str(),
        InterestMode::from_compounding(args.compound),
        Granularity::from_monthly(args.monthly),
    );

    let calculator = Calculator::with_input(config, input);
    let rendering = calculator.calculate();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendering)?);
    } else {
        print_rendering(&rendering);
    }

    let Rendering::Projected { result, .. } = &rendering else {
        return Ok(ExitCode::FAILURE);
    };

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
        write_csv(result, BufWriter::new(file))
            .with_context(|| format!("unable to write {}", path.display()))?;
        println!("\nFull series written to: {}", path.display());
    }

    if args.compare {
        print_comparison(&calculator);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_rendering(rendering: &Rendering) {
    println!("{}", rendering.text());

    let Some(chart) = rendering.chart() else {
        return;
    };

    println!();
    println!("{:>8} {:>16} {:>10}", "Period", "Value", "Axis");
    println!("{}", "-".repeat(36));
    for (label, value) in chart.iter() {
        println!("{:>8} {:>16.2} {:>10}", label, value, format_axis_label(value));
    }
}

fn print_comparison(calculator: &Calculator) {
    let locale = calculator.config().language.number_locale();

    println!();
    println!("{:>18} {:>8} {:>16} {:>16}", "Mode", "Periods", "Interest", "Total");
    println!("{}", "-".repeat(61));
    for comparison in calculator.compare_modes() {
        let name = format!("{:?}/{}", comparison.mode, comparison.granularity);
        match comparison.outcome {
            Ok(result) => println!(
                "{:>18} {:>8} {:>16} {:>16}",
                name,
                result.len(),
                format_amount(result.interest(), locale),
                format_amount(result.total(), locale),
            ),
            Err(err) => println!("{:>18} {}", name, err),
        }
    }
}
