//! `inventory-importer` -- the legacy import pipeline.
//!
//! Importers read rows from the legacy `mwnf3` database through the
//! [`source::LegacySource`] contract, transform them into target records,
//! resolve cross-entity references via the shared tracker, and persist
//! through a pluggable [`strategy::WriteStrategy`] (direct SQL or REST
//! API). The [`runner`] sequences importers into dependency order and
//! aggregates per-importer results into a run summary.

pub mod context;
pub mod importers;
pub mod logger;
pub mod runner;
pub mod samples;
pub mod seed;
pub mod source;
pub mod strategies;
pub mod strategy;
