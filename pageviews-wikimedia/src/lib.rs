//! pageviews-wikimedia
//!
//! Connector that implements `PageviewsConnector` on top of the Wikimedia REST
//! API's per-article endpoint:
//!
//! `GET {base}/{project}/{access}/{agent}/{title}/daily/{YYYYMMDD}/{YYYYMMDD}`
//!
//! Only a `200` response is parsed; any other status becomes
//! `PageviewsError::Upstream`. There is no retry, backoff, or pagination.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
/// Upstream JSON shape and normalization.
pub mod wire;

use std::sync::Arc;

use adapter::{RealAdapter, WmPageviews};
use async_trait::async_trait;
use pageviews_core::{
    DateRange, PageTitle, PageviewSeries, PageviewsError, WikimediaConfig,
    connector::{ConnectorKey, DailyViewsProvider, PageviewsConnector},
};

pub(crate) const CONNECTOR_NAME: &str = "pageviews-wikimedia";

/// Public connector type. Production users will construct with `WikimediaConnector::new_default()`.
pub struct WikimediaConnector {
    pageviews: Arc<dyn WmPageviews>,
}

impl WikimediaConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new(CONNECTOR_NAME);

    /// Build with a fresh HTTP client and the default Wikimedia configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, PageviewsError> {
        Self::try_new(WikimediaConfig::default())
    }

    /// Build with a fresh HTTP client configured from `cfg`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn try_new(cfg: WikimediaConfig) -> Result<Self, PageviewsError> {
        Ok(Self::from_adapter(Arc::new(RealAdapter::new(cfg)?)))
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// The `User-Agent` header from `cfg` is set on every request regardless of
    /// the client's own defaults.
    #[must_use]
    pub fn new_with_reqwest_client(http: reqwest::Client, cfg: WikimediaConfig) -> Self {
        Self::from_adapter(Arc::new(RealAdapter::with_client(http, cfg)))
    }

    /// Build from any transport adapter (used for injection in tests).
    #[must_use]
    pub fn from_adapter(pageviews: Arc<dyn WmPageviews>) -> Self {
        Self { pageviews }
    }
}

#[async_trait]
impl DailyViewsProvider for WikimediaConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pageviews_wikimedia::daily_views",
            skip(self, title, range),
            fields(title = %title, start = %range.start(), end = %range.end()),
        )
    )]
    async fn daily_views(
        &self,
        title: &PageTitle,
        range: &DateRange,
    ) -> Result<PageviewSeries, PageviewsError> {
        let raw = self.pageviews.per_article(title, range).await?;
        if raw.status != 200 {
            return Err(PageviewsError::upstream(title.as_str(), raw.status));
        }
        let series = wire::parse_per_article(title, &raw.body)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(records = series.len(), "parsed per-article pageviews");
        Ok(series)
    }
}

impl PageviewsConnector for WikimediaConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Wikimedia"
    }

    fn as_daily_views_provider(&self) -> Option<&dyn DailyViewsProvider> {
        Some(self as &dyn DailyViewsProvider)
    }
}
