// ==============================================================================
// lib.rs - Genotype QC Library
// ==============================================================================
// Description: Library interface for lab vs. HapMap reference genotype QC
// Author: Matt Barham
// Created: 2025-11-03
// Modified: 2026-10-14
// Version: 2.0.0
// ==============================================================================

pub mod parsers;
pub mod models;
pub mod comparator;
pub mod summary;
pub mod provenance;
pub mod pipeline;
pub mod report;
