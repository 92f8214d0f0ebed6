// ==============================================================================
// pipeline.rs - Genotype QC Pipeline
// ==============================================================================
// Description: Loads HapMap reference and lab calls, joins them, summarizes mismatches
// Author: Matt Barham
// Created: 2025-10-31
// Modified: 2026-10-14
// Version: 3.1.0
// ==============================================================================

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::comparator::compare_genotypes;
use crate::models::{ComparisonRecord, QcSummary};
use crate::parsers::{discover_reference_files, read_lab_file, read_reference_file};
use crate::provenance::InputFile;
use crate::summary::calculate_statistics;

/// Everything produced by one QC run
#[derive(Debug)]
pub struct QcRun {
    pub reference_files: Vec<InputFile>,
    pub lab_file: InputFile,
    pub reference_rows: usize,
    pub lab_rows: usize,
    pub comparisons: Vec<ComparisonRecord>,
    pub summary: QcSummary,
}

pub struct QcPipeline {
    reference_dir: PathBuf,
    lab_file: PathBuf,
}

impl QcPipeline {
    pub fn new(reference_dir: PathBuf, lab_file: PathBuf) -> Self {
        Self {
            reference_dir,
            lab_file,
        }
    }

    /// Run the full pipeline; any load error aborts with no partial result
    pub fn run(&self) -> Result<QcRun> {
        info!(
            "Starting genotype QC: reference {:?}, lab {:?}",
            self.reference_dir, self.lab_file
        );

        // 1. Reference panel
        let reference_paths = discover_reference_files(&self.reference_dir)
            .context("Failed to locate reference files")?;
        info!("Found {} reference files", reference_paths.len());

        let mut reference = Vec::new();
        let mut reference_files = Vec::with_capacity(reference_paths.len());
        for path in &reference_paths {
            let loaded = read_reference_file(path).context("Failed to load reference data")?;
            reference.extend(loaded.records);
            reference_files.push(loaded.input);
        }

        // 2. Lab results, fingerprinted in the same pass
        let loaded_lab = read_lab_file(&self.lab_file).context("Failed to load lab data")?;
        let lab = loaded_lab.records;
        let lab_file = loaded_lab.input;

        // 3. Join and summarize
        let comparisons = compare_genotypes(&reference, &lab);
        debug!(
            "Joined {} reference rows with {} lab rows into {} comparisons",
            reference.len(),
            lab.len(),
            comparisons.len()
        );

        let summary = calculate_statistics(&comparisons);
        info!(
            "QC complete: {} compared, {} mismatches across {} markers",
            summary.total_compared,
            summary.mismatch_count,
            summary.unique_error_markers.len()
        );

        Ok(QcRun {
            reference_files,
            lab_file,
            reference_rows: reference.len(),
            lab_rows: lab.len(),
            comparisons,
            summary,
        })
    }
}
