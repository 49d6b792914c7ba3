//! `inventory-core` -- pure types and logic for the legacy import pipeline.
//!
//! This crate has zero I/O (no DB, no async, no filesystem). It provides:
//!
//! - The closed entity-type catalogue and its target-table mapping
//! - Write-payload records handed to a write strategy
//! - The backward-compatibility tracker shared across import phases
//! - Legacy 2-letter code mappings (languages, countries)
//! - Sample capture types for test-fixture generation
//! - The shared error enum

pub mod compat;
pub mod entity;
pub mod error;
pub mod mappings;
pub mod record;
pub mod result;
pub mod sample;
pub mod text;
pub mod tracker;
pub mod types;
