// ==============================================================================
// report.rs - QC Report Generation
// ==============================================================================
// Description: Renders QC results as plain text, JSON, or a CSV comparison table
// Author: Matt Barham
// Created: 2025-11-06
// Modified: 2026-10-14
// Version: 2.1.0
// ==============================================================================

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use crate::models::{ComparisonRecord, QcSummary};
use crate::pipeline::QcRun;
use crate::provenance::InputFile;

/// Supported report formats on standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Mismatch count followed by one error marker per line
    Text,
    /// Machine-readable report with input provenance
    Json,
}

/// Complete QC report (JSON output)
#[derive(Debug, Serialize, Deserialize)]
pub struct QcReport {
    pub metadata: ReportMetadata,
    pub summary: QcSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concordance: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub reference_files: Vec<InputFile>,
    pub lab_file: InputFile,
    pub reference_rows: usize,
    pub lab_rows: usize,
}

impl QcReport {
    pub fn from_run(run: &QcRun) -> Self {
        Self {
            metadata: ReportMetadata {
                run_id: Uuid::new_v4(),
                generated_at: Utc::now(),
                reference_files: run.reference_files.clone(),
                lab_file: run.lab_file.clone(),
                reference_rows: run.reference_rows,
                lab_rows: run.lab_rows,
            },
            summary: run.summary.clone(),
            concordance: run.summary.concordance(),
        }
    }
}

/// Render the plain-text report
///
/// ```text
/// Mismatch count: 1
///
/// Unique error markers (1 total):
/// rs4030303
/// ```
pub fn render_text(summary: &QcSummary) -> String {
    let mut out = format!(
        "Mismatch count: {}\n\nUnique error markers ({} total):\n",
        summary.mismatch_count,
        summary.unique_error_markers.len()
    );
    for marker in &summary.unique_error_markers {
        out.push_str(marker);
        out.push('\n');
    }
    out
}

pub fn render(run: &QcRun, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(&run.summary)),
        OutputFormat::Json => {
            let report = QcReport::from_run(run);
            let mut json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize QC report")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write every joined pair as CSV
/// (individual, marker, allele_result_ref, allele_result_lab, match)
pub fn write_comparison_csv(path: &Path, comparisons: &[ComparisonRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for comparison in comparisons {
        writer.serialize(comparison)?;
    }
    writer.flush()?;

    info!("Wrote {} comparisons to {:?}", comparisons.len(), path);
    Ok(())
}
