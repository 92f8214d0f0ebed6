// ==============================================================================
// lab.rs - Lab Genotype Export Loader
// ==============================================================================
// Description: Parser for semicolon-separated lab genotype results
// Author: Matt Barham
// Created: 2025-11-06
// Modified: 2026-10-14
// Version: 2.1.0
// ==============================================================================
// Format: Semicolon-delimited text with a fixed two-line preamble
// Example:
//   individual;marker;allele_result
//   ----------;------;-------------
//   CEP_C13;rs4030303;A/A
//   CEP_C13;rs10399749;A/A
// ==============================================================================

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

use super::{read_genotype_rows, LoadError, LoadedFile};
use crate::models::GenotypeRecord;
use crate::provenance::DigestReader;

/// Lines discarded at the top of every lab file, whatever they contain
pub const LAB_PREAMBLE_LINES: u64 = 2;

/// Load lab genotype results from `path`
///
/// The first two lines are skipped unconditionally. A file whose preamble is
/// shorter than two lines loses data rows; no header shape is checked.
///
/// # Errors
/// * `LoadError::NotFound` - `path` does not exist
/// * `LoadError::Parse` - A data row does not have exactly 3 fields
pub fn load_lab_data(path: impl AsRef<Path>) -> Result<Vec<GenotypeRecord>, LoadError> {
    Ok(read_lab_file(path.as_ref())?.records)
}

/// Parse the lab file, fingerprinting every byte read, preamble included
pub fn read_lab_file(path: &Path) -> Result<LoadedFile, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(format!(
            "Lab file not found: {}",
            path.display()
        )));
    }

    let mut reader = BufReader::new(DigestReader::new(File::open(path)?));

    // Raw bytes, so preamble content is never decoded
    let mut discarded = Vec::new();
    for _ in 0..LAB_PREAMBLE_LINES {
        discarded.clear();
        if reader.read_until(b'\n', &mut discarded)? == 0 {
            break;
        }
    }

    let records = read_genotype_rows(&mut reader, b';', path, LAB_PREAMBLE_LINES)?;
    let input = reader.into_inner().finish(path);
    info!("Loaded {} lab rows from {:?}", records.len(), path);

    Ok(LoadedFile { records, input })
}
