use std::sync::Arc;
#[cfg(feature = "tracing")]
use std::convert::TryFrom;
use std::time::Duration;

use pageviews_core::{
    FetchStrategy, PageviewsConfig, PageviewsConnector, PageviewsError, TitleConfig,
    TitleExtractor,
};

/// Orchestrator that turns article URLs into a merged pageview comparison.
pub struct Pageviews {
    pub(crate) connectors: Vec<Arc<dyn PageviewsConnector>>,
    pub(crate) cfg: PageviewsConfig,
    pub(crate) titles: TitleExtractor,
}

/// Builder for constructing a `Pageviews` orchestrator with custom configuration.
pub struct PageviewsBuilder {
    connectors: Vec<Arc<dyn PageviewsConnector>>,
    cfg: PageviewsConfig,
}

impl Default for PageviewsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageviewsBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Starts with no connectors; register at least one via [`Self::with_connector`].
    /// Defaults: `/wiki/` article prefix on any host, share seed `42`,
    /// sequential fetches and no request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: PageviewsConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Connectors are tried in registration order for every page; the first one
    /// that answers successfully serves it and earlier failures are kept as
    /// warnings. Duplicates are not deduplicated.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn PageviewsConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: PageviewsConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Seed for the synthetic share noise.
    ///
    /// The generator is re-seeded on every comparison, so the same seed and the
    /// same merged rows always give the same share columns.
    #[must_use]
    pub const fn share_seed(mut self, seed: u64) -> Self {
        self.cfg.share_seed = seed;
        self
    }

    /// Select how the two per-page fetches of a comparison are scheduled.
    ///
    /// - `Sequential`: page A, then page B. At most one request in flight.
    /// - `Concurrent`: both at once. Results are still assigned A then B, so the
    ///   merged table and share noise are identical to the sequential run.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Bound each per-page fetch.
    ///
    /// When exceeded the page is reported with a `RequestTimeout` warning and an
    /// empty series.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Only accept article URLs on these hosts (case-insensitive).
    #[must_use]
    pub fn allowed_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.titles.allowed_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Path prefix that precedes the title in article URLs (default `/wiki/`).
    #[must_use]
    pub fn article_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cfg.titles.article_prefix = prefix.into();
        self
    }

    /// Build the `Pageviews` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered or the
    /// article prefix is empty.
    pub fn build(self) -> Result<Pageviews, PageviewsError> {
        if self.connectors.is_empty() {
            return Err(PageviewsError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        validate_titles(&self.cfg.titles)?;

        let titles = TitleExtractor::new(&self.cfg.titles);
        Ok(Pageviews {
            connectors: self.connectors,
            cfg: self.cfg,
            titles,
        })
    }
}

fn validate_titles(cfg: &TitleConfig) -> Result<(), PageviewsError> {
    if cfg.article_prefix.is_empty() {
        return Err(PageviewsError::InvalidArg(
            "article prefix must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Attribute a connector failure to the connector that produced it.
///
/// Recoverable per-page failures already carry their own context and pass
/// through. Anything else is reported as a `Connector` error so the page can
/// still fall back to the next connector.
pub fn tag_err(connector: &str, e: PageviewsError) -> PageviewsError {
    if e.is_recoverable() {
        return e;
    }
    PageviewsError::Connector {
        connector: connector.to_string(),
        msg: e.to_string(),
    }
}

impl Pageviews {
    /// Start building a new `Pageviews` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use pageviews::{FetchStrategy, Pageviews};
    /// use pageviews_wikimedia::WikimediaConnector;
    ///
    /// let wm = Arc::new(WikimediaConnector::new_default()?);
    /// let pv = Pageviews::builder()
    ///     .with_connector(wm)
    ///     .share_seed(42)
    ///     .fetch_strategy(FetchStrategy::Concurrent)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> PageviewsBuilder {
        PageviewsBuilder::new()
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PageviewsConfig {
        &self.cfg
    }

    /// Wrap a provider future with the optional request deadline.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pageviews::core::call_with_deadline",
            skip(fut),
            fields(
                capability = capability,
                timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            ),
        )
    )]
    pub(crate) async fn call_with_deadline<T, Fut>(
        capability: &'static str,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, PageviewsError>
    where
        Fut: core::future::Future<Output = Result<T, PageviewsError>>,
    {
        match timeout {
            Some(deadline) => (tokio::time::timeout(deadline, fut).await)
                .unwrap_or_else(|_| Err(PageviewsError::request_timeout(capability))),
            None => fut.await,
        }
    }
}
