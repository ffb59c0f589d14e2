//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::PageviewsError;
use crate::model::{MergedSeries, PageviewSeries};

/// Outcome of fetching one article.
///
/// A failed fetch is not an error at this level: `series` is empty and the
/// failure is recorded in `warnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageviewsReport {
    /// Fetched series (possibly empty).
    pub series: PageviewSeries,
    /// Non-fatal issues encountered while fetching.
    pub warnings: Vec<PageviewsError>,
}

impl PageviewsReport {
    /// True if the fetch produced no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Result of a successful two-page comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Merged table with views and synthetic shares.
    pub series: MergedSeries,
    /// Non-fatal issues encountered while building the comparison.
    pub warnings: Vec<PageviewsError>,
}
