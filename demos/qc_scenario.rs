// ==============================================================================
// qc_scenario.rs - Genotype QC Example
// ==============================================================================
// Description: Runs the QC pipeline on a small CEPH fixture and prints the report
// Author: Matt Barham
// Created: 2026-10-14
// Modified: 2026-10-14
// Version: 1.0.0
// ==============================================================================

use genotype_qc::pipeline::QcPipeline;
use genotype_qc::report::{render, OutputFormat};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Genotype QC Example ===\n");

    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("HapMap_r23a_CEP_C13_AllSNPs.txt"),
        "CEP_C13\trs4030303\tC/C\nCEP_C13\trs10399749\tA/A\n",
    )?;
    fs::write(
        dir.path().join("HapMap_r23a_CEP_C14_AllSNPs.txt"),
        "CEP_C14\trs48147398\tC/C\nCEP_C14\trs4030303\tC/T\n",
    )?;
    fs::write(
        dir.path().join("genotype_inf.txt"),
        "individual;marker;allele_result\n\
         ----------;------;-------------\n\
         CEP_C13;rs4030303;A/A\n\
         CEP_C13;rs10399749;A/A\n\
         CEP_C14;rs48147398;C/C\n\
         CEP_C14;rs4030303;T/C\n\
         CEP_C15;rs4030303;C/C\n",
    )?;

    let pipeline = QcPipeline::new(dir.path().to_path_buf(), dir.path().join("genotype_inf.txt"));
    let run = pipeline.run()?;

    println!("{:<10} {:<12} {:<6} {:<6} {}", "Individual", "Marker", "Ref", "Lab", "Match");
    println!("{:-<50}", "");
    for c in &run.comparisons {
        println!(
            "{:<10} {:<12} {:<6} {:<6} {}",
            c.individual, c.marker, c.allele_result_ref, c.allele_result_lab, c.is_match
        );
    }

    // CEP_C15 has no reference row and is dropped from the join
    println!("\n--- Text report ---");
    print!("{}", render(&run, OutputFormat::Text)?);

    println!("\n--- JSON report ---");
    print!("{}", render(&run, OutputFormat::Json)?);

    Ok(())
}
