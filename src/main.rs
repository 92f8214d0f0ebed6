// ==============================================================================
// main.rs - Genotype QC Entry Point
// ==============================================================================
// Description: Compares lab genotype calls against a HapMap reference panel
// Author: Matt Barham
// Created: 2025-10-31
// Modified: 2026-10-14
// Version: 2.0.0
// ==============================================================================

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use genotype_qc::pipeline::QcPipeline;
use genotype_qc::report::{self, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory with HapMap_r23a_CEP_C*_AllSNPs.txt reference files
    reference_dir: PathBuf,

    /// Lab genotype file (semicolon-separated, two-line preamble)
    lab_file: PathBuf,

    /// Report format on stdout
    #[arg(long, env = "GENOTYPE_QC_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write every joined pair to this CSV file
    #[arg(long)]
    comparison_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "genotype_qc=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let pipeline = QcPipeline::new(args.reference_dir, args.lab_file);
    let run = pipeline.run()?;

    // Render fully before printing so a failure leaves stdout empty
    let rendered = report::render(&run, args.format)?;

    if let Some(path) = &args.comparison_out {
        report::write_comparison_csv(path, &run.comparisons)?;
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    info!("Genotype QC finished");
    Ok(())
}
