use async_trait::async_trait;

use crate::{DateRange, PageTitle, PageviewSeries, PageviewsError};
pub use pageviews_types::ConnectorKey;

/// Focused role trait for connectors that provide daily per-article views.
#[async_trait]
pub trait DailyViewsProvider: Send + Sync {
    /// Fetch daily views for `title` over `range`.
    ///
    /// Records are returned in upstream order. A non-success upstream status is
    /// an `Upstream` error; an unexpected body shape is `MalformedResponse`.
    async fn daily_views(
        &self,
        title: &PageTitle,
        range: &DateRange,
    ) -> Result<PageviewSeries, PageviewsError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait PageviewsConnector: Send + Sync {
    /// A stable identifier (e.g., "pageviews-wikimedia").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise daily-views capability by returning a usable trait object when supported.
    fn as_daily_views_provider(&self) -> Option<&dyn DailyViewsProvider> {
        None
    }
}
