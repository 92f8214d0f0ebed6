// ==============================================================================
// comparator.rs - Reference vs. Lab Genotype Join
// ==============================================================================
// Description: Inner hash-join of reference and lab calls on (individual, marker)
// Author: Matt Barham
// Created: 2025-11-06
// Modified: 2026-10-14
// Version: 2.0.0
// ==============================================================================
// Algorithm:
//   1. Index lab rows by (individual, marker), keeping every row per key
//   2. For each reference row, emit one comparison per lab row with that key
//   Keys present on one side only produce nothing. Duplicate keys on either
//   side yield the full cross-product of that key group.
// ==============================================================================

use std::collections::HashMap;

use crate::models::{ComparisonRecord, GenotypeRecord};

/// Compare reference calls against lab calls
///
/// Output follows reference order, then lab order within a key group.
///
/// # Examples
/// ```
/// use genotype_qc::comparator::compare_genotypes;
/// use genotype_qc::models::GenotypeRecord;
///
/// let reference = vec![GenotypeRecord::new("CEP_C13", "rs4030303", "C/C")];
/// let lab = vec![GenotypeRecord::new("CEP_C13", "rs4030303", "A/A")];
///
/// let joined = compare_genotypes(&reference, &lab);
/// assert_eq!(joined.len(), 1);
/// assert!(!joined[0].is_match);
/// ```
pub fn compare_genotypes(
    reference: &[GenotypeRecord],
    lab: &[GenotypeRecord],
) -> Vec<ComparisonRecord> {
    let mut lab_index: HashMap<(&str, &str), Vec<&GenotypeRecord>> = HashMap::new();
    for record in lab {
        lab_index.entry(record.key()).or_default().push(record);
    }

    let mut joined = Vec::new();
    for ref_record in reference {
        if let Some(lab_rows) = lab_index.get(&ref_record.key()) {
            joined.extend(
                lab_rows
                    .iter()
                    .map(|lab_record| ComparisonRecord::from_pair(ref_record, lab_record)),
            );
        }
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(individual: &str, marker: &str, allele: &str) -> GenotypeRecord {
        GenotypeRecord::new(individual, marker, allele)
    }

    #[test]
    fn test_scenario_join() {
        let reference = vec![
            rec("CEP_C13", "rs4030303", "C/C"),
            rec("CEP_C13", "rs10399749", "A/A"),
            rec("CEP_C14", "rs48147398", "C/C"),
        ];
        let lab = vec![
            rec("CEP_C13", "rs4030303", "A/A"),
            rec("CEP_C13", "rs10399749", "A/A"),
            rec("CEP_C14", "rs48147398", "C/C"),
        ];

        let joined = compare_genotypes(&reference, &lab);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.iter().filter(|c| c.is_match).count(), 2);

        // rs4030303: C/C vs A/A = mismatch
        assert_eq!(joined[0].marker, "rs4030303");
        assert_eq!(joined[0].allele_result_ref, "C/C");
        assert_eq!(joined[0].allele_result_lab, "A/A");
        assert!(!joined[0].is_match);
    }

    #[test]
    fn test_one_sided_keys_dropped() {
        let reference = vec![
            rec("CEP_C13", "rs1", "A/A"),
            rec("CEP_C13", "rs2", "C/C"),
        ];
        // Same marker, different individual does not join
        let lab = vec![
            rec("CEP_C14", "rs1", "A/A"),
            rec("CEP_C13", "rs2", "C/C"),
            rec("CEP_C13", "rs3", "G/G"),
        ];

        let joined = compare_genotypes(&reference, &lab);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].individual, "CEP_C13");
        assert_eq!(joined[0].marker, "rs2");
    }

    #[test]
    fn test_duplicate_keys_cross_product() {
        let reference = vec![
            rec("CEP_C13", "rs1", "A/A"),
            rec("CEP_C13", "rs1", "A/G"),
        ];
        let lab = vec![
            rec("CEP_C13", "rs1", "A/A"),
            rec("CEP_C13", "rs1", "G/G"),
            rec("CEP_C13", "rs1", "A/G"),
        ];

        let joined = compare_genotypes(&reference, &lab);
        assert_eq!(joined.len(), 6);

        let pairs: Vec<(&str, &str)> = joined
            .iter()
            .map(|c| (c.allele_result_ref.as_str(), c.allele_result_lab.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("A/A", "A/A"),
                ("A/A", "G/G"),
                ("A/A", "A/G"),
                ("A/G", "A/A"),
                ("A/G", "G/G"),
                ("A/G", "A/G"),
            ]
        );
        assert_eq!(joined.iter().filter(|c| c.is_match).count(), 2);
    }

    #[test]
    fn test_empty_inputs() {
        let reference = vec![rec("CEP_C13", "rs1", "A/A")];
        assert!(compare_genotypes(&reference, &[]).is_empty());
        assert!(compare_genotypes(&[], &reference).is_empty());
    }
}
