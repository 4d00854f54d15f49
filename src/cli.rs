use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rockcorpus_jams::config;
use rockcorpus_jams::rockcorpus::{run_batch, BatchOptions, BatchSummary, ConvertError};

/// Rock Corpus to JAMS conversion tool
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the unarchived Rock Corpus dataset directory
    #[arg(required = true)]
    input_dir: PathBuf,

    /// Directory to write the JAMS files into
    #[arg(required = true)]
    output_dir: PathBuf,

    /// Set when the dataset has been run through the add-timings utility
    #[arg(short, long)]
    timing: bool,

    /// Only print the final counts, not the per-song listing
    #[arg(short, long)]
    quiet: bool,
}

fn print_summary(summary: &BatchSummary, quiet: bool) {
    if !quiet {
        for song in &summary.converted {
            println!("converted: {}", song);
        }
        for (song, reason) in &summary.skipped {
            println!("skipped:   {} ({})", song, reason);
        }
    }
    println!(
        "{} converted, {} skipped",
        summary.converted.len(),
        summary.skipped.len()
    );
}

fn run(cli: &Cli) -> Result<BatchSummary, ConvertError> {
    let options = BatchOptions {
        input_dir: cli.input_dir.clone(),
        output_dir: cli.output_dir.clone(),
        timing_added: cli.timing,
        layout: config::get_dataset_layout(),
    };
    run_batch(&options)
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rockcorpus_jams=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(summary) => print_summary(&summary, cli.quiet),
        Err(err) => {
            eprintln!("\nERROR: {}\n", err);
            if let ConvertError::MissingReferenceFile(_) = err {
                eprintln!("Please check that:");
                eprintln!("1. The input path points at the unarchived Rock Corpus folder");
                eprintln!("2. The folder contains the audio sources index at its top level");
            }
            process::exit(1);
        }
    }
}
