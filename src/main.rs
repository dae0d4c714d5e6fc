use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use payroll_events::config::{ConfigLoader, ReportConfig};
use payroll_events::error::PayrollResult;
use payroll_events::ingest::ingest_file;
use payroll_events::reports::PayrollReport;

#[derive(Debug, Parser)]
#[command(about = "Print payroll reports from an employee event file")]
struct Args {
    #[arg(index = 1, help = "Path to the event file (defaults to the configured input)")]
    input_file: Option<PathBuf>,

    #[arg(long, help = "Path to a YAML configuration file")]
    config: Option<PathBuf>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(err) = run(args) {
        error!(error = %err, "Payroll run failed");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> PayrollResult<()> {
    let config = match &args.config {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => ReportConfig::default(),
    };
    let input = args.input_file.unwrap_or_else(|| config.input.clone());

    let ingested = ingest_file(&input, &config)?;
    let report = PayrollReport::generate(&ingested.registry, &config)?;

    print!("{report}");
    Ok(())
}
