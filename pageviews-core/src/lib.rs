//! pageviews-core
//!
//! Core types, traits, and utilities shared across the pageviews workspace.
//!
//! - `types`: the data model, configuration, and error type (from `pageviews-types`).
//! - `connector`: the `PageviewsConnector` trait and its capability provider traits.
//! - `title`: article-URL to title extraction.
//! - `timeseries`: outer join of two daily series and synthetic share derivation.
#![warn(missing_docs)]

/// Connector capability traits and the primary `PageviewsConnector` interface.
pub mod connector;
/// Article URL parsing.
pub mod title;
/// Time-series utilities for merging and deriving columns.
pub mod timeseries;
pub mod types;

pub use connector::PageviewsConnector;
pub use timeseries::merge::{merge_series, outer_join};
pub use timeseries::synthetic::{derive_shares, share_noise, synthetic_share};
pub use title::{TitleExtractor, extract_page_title};
pub use types::*;

#[cfg(feature = "dataframe")]
pub use timeseries::dataframe::ToDataFrame;
