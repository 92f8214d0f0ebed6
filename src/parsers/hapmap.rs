// ==============================================================================
// hapmap.rs - HapMap Reference Panel Loader
// ==============================================================================
// Description: Discovers and parses HapMap r23a CEPH per-individual SNP files
// Author: Matt Barham
// Created: 2025-11-04
// Modified: 2026-10-14
// Version: 2.1.0
// ==============================================================================
// Format: Tab-delimited text, no header, 3 columns
// Example:
//   CEP_C13    rs4030303     C/C
//   CEP_C13    rs10399749    A/A
//   CEP_C14    rs48147398    C/C
// ==============================================================================

use glob::Pattern;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::{read_genotype_rows, LoadError, LoadedFile};
use crate::models::GenotypeRecord;
use crate::provenance::DigestReader;

/// File name pattern of reference panel files inside the reference directory
pub const REFERENCE_FILE_PATTERN: &str = "HapMap_r23a_CEP_C*_AllSNPs.txt";

/// Locate every reference file directly inside `dir`
///
/// Returned paths are sorted so that repeated runs concatenate rows in the
/// same order.
///
/// # Errors
/// * `LoadError::NotFound` - `dir` does not exist or contains no matching file
pub fn discover_reference_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, LoadError> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(not_found(dir));
    }

    let pattern = Pattern::new(REFERENCE_FILE_PATTERN).map_err(|e| LoadError::InvalidPattern {
        pattern: REFERENCE_FILE_PATTERN.to_string(),
        details: e.to_string(),
    })?;

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| LoadError::Io(e.into()))?;

        // Unrelated entries, dangling links included, are never resolved
        let file_name = entry.file_name().to_string_lossy();
        if !pattern.matches(&file_name) {
            continue;
        }

        // Resolves symlinks; directories and dangling links with a matching name are skipped
        if !entry.path().is_file() {
            debug!("Skipping non-file entry {:?}", entry.path());
            continue;
        }

        debug!("Found reference file: {:?}", entry.path());
        files.push(entry.into_path());
    }

    if files.is_empty() {
        return Err(not_found(dir));
    }

    files.sort();
    Ok(files)
}

/// Parse one reference file, fingerprinting the bytes as they are parsed
pub fn read_reference_file(path: &Path) -> Result<LoadedFile, LoadError> {
    let mut reader = BufReader::new(DigestReader::new(File::open(path)?));
    let records = read_genotype_rows(&mut reader, b'\t', path, 0)?;
    let input = reader.into_inner().finish(path);

    info!("Loaded {} reference rows from {:?}", records.len(), path);
    Ok(LoadedFile { records, input })
}

/// Parse and concatenate the given reference files
pub fn load_reference_files(files: &[PathBuf]) -> Result<Vec<GenotypeRecord>, LoadError> {
    let mut records = Vec::new();

    for path in files {
        records.extend(read_reference_file(path)?.records);
    }

    Ok(records)
}

/// Load all HapMap reference files in `dir` into one record set
///
/// # Arguments
/// * `dir` - Directory holding `HapMap_r23a_CEP_C*_AllSNPs.txt` files
///
/// # Returns
/// * `Ok(Vec<GenotypeRecord>)` - Trimmed rows from every matching file
/// * `Err(LoadError::NotFound)` - No matching file, or `dir` is missing
/// * `Err(LoadError::Parse)` - A row does not have exactly 3 fields
pub fn load_reference_data(dir: impl AsRef<Path>) -> Result<Vec<GenotypeRecord>, LoadError> {
    let files = discover_reference_files(dir)?;
    load_reference_files(&files)
}

fn not_found(dir: &Path) -> LoadError {
    LoadError::NotFound(format!(
        "No reference files matching {} in {}",
        REFERENCE_FILE_PATTERN,
        dir.display()
    ))
}
