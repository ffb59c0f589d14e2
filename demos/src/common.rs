use std::sync::Arc;

use chrono::NaiveDate;
use clap::Args;
use pageviews::{DateRange, PageviewsConnector, PageviewsError};

/// Set this variable to run the demos against deterministic fixtures instead of
/// the live Wikimedia API.
pub const USE_MOCK_ENV: &str = "PAGEVIEWS_DEMOS_USE_MOCK";

/// Return a connector for demos.
///
/// # Errors
/// Returns an error if the HTTP client for the live connector cannot be built.
pub fn get_connector() -> Result<Arc<dyn PageviewsConnector>, PageviewsError> {
    if std::env::var(USE_MOCK_ENV).is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Ok(Arc::new(pageviews_mock::MockConnector::new()))
    } else {
        Ok(Arc::new(pageviews_wikimedia::WikimediaConnector::new_default()?))
    }
}

/// Inclusive date window shared by the demos.
#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    /// First day, `YYYY-MM-DD`.
    #[arg(long, default_value = "2022-01-01")]
    pub start: NaiveDate,
    /// Last day, `YYYY-MM-DD`.
    #[arg(long, default_value = "2022-01-31")]
    pub end: NaiveDate,
}

impl RangeArgs {
    /// The window as a `DateRange`.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}
