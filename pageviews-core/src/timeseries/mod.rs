//! Time-series utilities used by the orchestrator.
//!
//! Modules include:
//! - `merge`: date-keyed outer join of two daily series
//! - `synthetic`: seeded synthetic share columns (demo data)
//! - `dataframe`: optional polars export (feature `dataframe`)
/// Optional export of merged tables to polars.
#[cfg(feature = "dataframe")]
pub mod dataframe;
/// Merge utilities for joining two daily series.
pub mod merge;
/// Seeded synthetic share derivation.
pub mod synthetic;
