//! Pageviews compares the daily Wikipedia pageviews of two articles.
//!
//! Overview
//! - Turns article URLs such as `https://en.wikipedia.org/wiki/Foo_Bar` into titles.
//! - Fetches one daily series per article through connectors implementing the
//!   `pageviews_core` contracts (the Wikimedia REST API in production, a mock in tests).
//! - Outer-joins the two series by date and adds two synthetic "shares" columns.
//!
//! Key behaviors
//! - Bad input (a URL that is not an article URL) is rejected before any request.
//! - Per-page fetch failures are never fatal on their own: they become warnings
//!   next to an empty series, and an empty series aborts the comparison with `NoData`.
//! - Shares are fabricated demo data: `views / 10` plus uniform noise in `[0, 10)`
//!   from a generator re-seeded on every comparison, so results are reproducible.
//! - Fetch strategy: `Sequential` (A then B) or `Concurrent`; both yield identical output.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use pageviews::{DateRange, Pageviews};
//! use pageviews_wikimedia::WikimediaConnector;
//!
//! let pv = Pageviews::builder()
//!     .with_connector(Arc::new(WikimediaConnector::new_default()?))
//!     .build()?;
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2022, 1, 31).unwrap(),
//! );
//! let cmp = pv
//!     .compare(
//!         "https://en.wikipedia.org/wiki/Python_(programming_language)",
//!         "https://en.wikipedia.org/wiki/Java_(programming_language)",
//!         &range,
//!     )
//!     .await?;
//! for row in cmp.series.rows() {
//!     println!("{} {:?} {:?}", row.date, row.views_a, row.views_b);
//! }
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Pageviews, PageviewsBuilder, tag_err};
pub use pageviews_core::{FetchStrategy, PageviewsConfig, TitleConfig};

// Re-export core types for convenience
pub use pageviews_core::{
    Comparison, DateRange, MergedRow, MergedSeries, PageTitle, PageviewRecord, PageviewSeries,
    PageviewsConnector, PageviewsError, PageviewsReport, extract_page_title,
};

#[cfg(feature = "dataframe")]
pub use pageviews_core::ToDataFrame;
