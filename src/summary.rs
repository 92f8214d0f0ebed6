// ==============================================================================
// summary.rs - QC Statistics
// ==============================================================================
// Description: Reduces joined comparisons into mismatch statistics
// Author: Matt Barham
// Created: 2025-11-06
// Modified: 2026-10-14
// Version: 1.0.0
// ==============================================================================

use std::collections::BTreeSet;

use crate::models::{ComparisonRecord, QcSummary};

/// Count mismatches and collect the distinct markers involved
///
/// `unique_error_markers` is sorted ascending by code point with no
/// duplicates, however many individuals disagree at a marker.
pub fn calculate_statistics(comparisons: &[ComparisonRecord]) -> QcSummary {
    let mut error_markers = BTreeSet::new();
    let mut mismatch_count = 0;

    for comparison in comparisons.iter().filter(|c| !c.is_match) {
        mismatch_count += 1;
        error_markers.insert(comparison.marker.as_str());
    }

    QcSummary {
        total_compared: comparisons.len(),
        match_count: comparisons.len() - mismatch_count,
        mismatch_count,
        unique_error_markers: error_markers.into_iter().map(str::to_string).collect(),
    }
}
