use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use velocity_limits::limits::VelocityLimits;
use velocity_limits::lines::{spawn_line_reader, write_lines};
use velocity_limits::validator::VelocityValidator;

/// Accept or reject customer loads against daily and weekly velocity limits
#[derive(Parser, Debug)]
#[command(name = "velocity-limits", version, about)]
struct Cli {
    /// File with one JSON load per line
    #[arg(short = 'i', long = "input-file", visible_alias = "inputFile")]
    input_file: PathBuf,

    /// File to write one JSON decision per line to
    #[arg(short = 'o', long = "output-file", visible_alias = "outputFile")]
    output_file: PathBuf,

    /// Maximum amount accepted per customer per calendar day
    #[arg(long, default_value_t = VelocityLimits::DEFAULT_DAY_MAX_AMOUNT)]
    day_max_amount: Decimal,

    /// Maximum number of loads accepted per customer per calendar day
    #[arg(long, default_value_t = VelocityLimits::DEFAULT_DAY_MAX_COUNT)]
    day_max_count: usize,

    /// Maximum amount accepted per customer per calendar week
    #[arg(long, default_value_t = VelocityLimits::DEFAULT_WEEK_MAX_AMOUNT)]
    week_max_amount: Decimal,

    /// Number of lines buffered between the reader and the validator
    #[arg(long, default_value_t = 1024)]
    channel_capacity: usize,
}

impl Cli {
    fn limits(&self) -> VelocityLimits {
        VelocityLimits {
            day_max_amount: self.day_max_amount,
            day_max_count: self.day_max_count,
            week_max_amount: self.week_max_amount,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let (lines, reader) = spawn_line_reader(cli.input_file.clone(), cli.channel_capacity);
    let mut validator = VelocityValidator::with_limits(cli.limits());
    let report = validator.process_channel(lines).await;

    // Whatever arrived before a read failure is still reported and written
    let read = reader.await.context("Line reader task failed")?;

    for (n, err) in report.errors.iter().enumerate() {
        log::warn!("Error #{} in load: {}", n, err);
    }

    if !report.decisions.is_empty() {
        write_lines(&cli.output_file, &report.decisions)
            .await
            .with_context(|| {
                format!("Failed to write output file '{}'", cli.output_file.display())
            })?;
    }

    log::info!(
        "Processed input: {} decisions, {} duplicates, {} errors",
        report.decisions.len(),
        report.duplicates,
        report.errors.len()
    );

    let lines_read = read
        .with_context(|| format!("Failed to read input file '{}'", cli.input_file.display()))?;
    log::debug!("Read {} lines", lines_read);

    Ok(())
}
