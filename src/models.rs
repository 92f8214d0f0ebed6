// ==============================================================================
// models.rs - Genotype QC Data Models
// ==============================================================================
// Description: Normalized genotype records, joined comparisons, QC summary
// Author: Matt Barham
// Created: 2025-11-12
// Modified: 2026-10-14
// Version: 3.0.0
// ==============================================================================

use serde::{Deserialize, Serialize};

/// A single genotype call, normalized from either the reference panel or the lab file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenotypeRecord {
    /// Subject identifier (e.g., "CEP_C13")
    pub individual: String,

    /// SNP identifier (e.g., "rs4030303")
    pub marker: String,

    /// Called genotype (e.g., "C/C")
    pub allele_result: String,
}

impl GenotypeRecord {
    /// Build a record, trimming surrounding whitespace from every field
    pub fn new(individual: &str, marker: &str, allele_result: &str) -> Self {
        Self {
            individual: individual.trim().to_string(),
            marker: marker.trim().to_string(),
            allele_result: allele_result.trim().to_string(),
        }
    }

    /// Join key: (individual, marker)
    pub fn key(&self) -> (&str, &str) {
        (&self.individual, &self.marker)
    }
}

/// One reference row joined with one lab row sharing the same key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub individual: String,
    pub marker: String,
    pub allele_result_ref: String,
    pub allele_result_lab: String,

    /// Exact string equality of the two allele results
    #[serde(rename = "match")]
    pub is_match: bool,
}

impl ComparisonRecord {
    pub fn from_pair(reference: &GenotypeRecord, lab: &GenotypeRecord) -> Self {
        Self {
            individual: reference.individual.clone(),
            marker: reference.marker.clone(),
            allele_result_ref: reference.allele_result.clone(),
            allele_result_lab: lab.allele_result.clone(),
            is_match: reference.allele_result == lab.allele_result,
        }
    }
}

/// Aggregate QC statistics over a comparison result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QcSummary {
    /// Number of joined pairs compared
    pub total_compared: usize,

    /// Number of pairs whose allele results agree
    pub match_count: usize,

    /// Number of pairs whose allele results differ
    pub mismatch_count: usize,

    /// Distinct markers with at least one mismatch, ascending
    pub unique_error_markers: Vec<String>,
}

impl QcSummary {
    /// Fraction of compared pairs that match, None if nothing was compared
    pub fn concordance(&self) -> Option<f64> {
        if self.total_compared == 0 {
            None
        } else {
            Some(self.match_count as f64 / self.total_compared as f64)
        }
    }
}
