// ==============================================================================
// parsers/mod.rs - Genotype file loaders
// ==============================================================================
// Description: Loaders for HapMap reference panels and lab genotype exports
// Author: Matt Barham
// Created: 2025-11-03
// Modified: 2026-10-14
// Version: 2.1.0
// ==============================================================================

pub mod hapmap;
pub mod lab;

pub use hapmap::{
    discover_reference_files, load_reference_data, load_reference_files, read_reference_file,
    REFERENCE_FILE_PATTERN,
};
pub use lab::{load_lab_data, read_lab_file};

use csv::ReaderBuilder;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::GenotypeRecord;
use crate::provenance::InputFile;

/// Rows parsed from one input file, with the fingerprint of the bytes read
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub records: Vec<GenotypeRecord>,
    pub input: InputFile,
}

/// Number of columns in both input formats: individual, marker, allele_result
pub const GENOTYPE_COLUMNS: usize = 3;

/// Errors that can occur while loading reference or lab genotype data
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid line format in {} at line {line}: {details}", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        details: String,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid file pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}

/// Read delimited genotype rows with the fixed column order
/// (individual, marker, allele_result).
///
/// Reads `reader` to end of file. `line_offset` is added to reported line
/// numbers for lines the caller already consumed from `reader`.
pub(crate) fn read_genotype_rows<R: Read>(
    reader: R,
    delimiter: u8,
    path: &Path,
    line_offset: u64,
) -> Result<Vec<GenotypeRecord>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        if row.len() != GENOTYPE_COLUMNS {
            let line = row.position().map(|p| p.line()).unwrap_or(0) + line_offset;
            return Err(LoadError::Parse {
                path: path.to_path_buf(),
                line,
                details: format!(
                    "Expected {} fields, found {}",
                    GENOTYPE_COLUMNS,
                    row.len()
                ),
            });
        }

        records.push(GenotypeRecord::new(&row[0], &row[1], &row[2]));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_reports_offset_line() {
        let data = "CEP_C13;rs1;A/A\nCEP_C13;rs2\n";
        let err = read_genotype_rows(data.as_bytes(), b';', Path::new("lab.txt"), 2).unwrap_err();
        match err {
            LoadError::Parse { line, details, .. } => {
                assert_eq!(line, 4);
                assert!(details.contains("found 2"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_rows_skips_blank_lines() {
        let data = "CEP_C13\trs1\tA/A\n\nCEP_C14\trs2\tC/C\n";
        let records = read_genotype_rows(data.as_bytes(), b'\t', Path::new("ref.txt"), 0).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].individual, "CEP_C14");
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let data: &[u8] = b"CEP_C13\trs1\tA/A\nCEP_C13\trs2\t\xff\xfe\n";
        let err = read_genotype_rows(data, b'\t', Path::new("ref.txt"), 0).unwrap_err();
        match err {
            LoadError::Csv { path, .. } => assert_eq!(path, PathBuf::from("ref.txt")),
            other => panic!("Expected Csv error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(LoadError::NotFound("x".to_string()).is_not_found());
        let parse = LoadError::Parse {
            path: PathBuf::from("x"),
            line: 1,
            details: String::new(),
        };
        assert!(!parse.is_not_found());
    }
}
