//! Offline pageviews connector serving fixed January 2022 fixtures.
//!
//! Used by the demos (`PAGEVIEWS_DEMOS_USE_MOCK`) and by tests that need a
//! deterministic connector without network access.

use async_trait::async_trait;
use pageviews_core::connector::{DailyViewsProvider, PageviewsConnector};
use pageviews_core::{DateRange, PageTitle, PageviewSeries, PageviewsError};

mod fixtures;

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
///
/// Known titles: `Python_(programming_language)`, `Java_(programming_language)`,
/// `Rust_(programming_language)`, `Sparse_page` (odd days only) and `Empty_page`,
/// all covering January 2022. `FAIL` returns a connector error and `TIMEOUT`
/// sleeps briefly before answering like an unknown title.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the fixture-backed connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(title: &str) -> Result<(), PageviewsError> {
        match title {
            "FAIL" => Err(PageviewsError::connector(
                "pageviews-mock",
                "forced failure: daily_views",
            )),
            "TIMEOUT" => {
                // Short enough not to slow tests; long enough to trip a tight request timeout.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl PageviewsConnector for MockConnector {
    fn name(&self) -> &'static str {
        "pageviews-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_daily_views_provider(&self) -> Option<&dyn DailyViewsProvider> {
        Some(self as &dyn DailyViewsProvider)
    }
}

#[async_trait]
impl DailyViewsProvider for MockConnector {
    async fn daily_views(
        &self,
        title: &PageTitle,
        range: &DateRange,
    ) -> Result<PageviewSeries, PageviewsError> {
        let t = title.as_str();
        Self::maybe_fail_or_timeout(t).await?;
        let records = fixtures::pageviews::by_title(t)
            .ok_or_else(|| PageviewsError::upstream(t, 404))?
            .into_iter()
            .filter(|r| range.contains(r.date))
            .collect();
        Ok(PageviewSeries {
            title: title.clone(),
            records,
        })
    }
}
