#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use pageviews_core::{DateRange, PageTitle, PageviewsError, WikimediaConfig};
use reqwest::header::USER_AGENT;
use url::Url;

use crate::CONNECTOR_NAME;

/// Status and body of one upstream response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// A `200 OK` response with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// A response with `status` and an empty body.
    #[must_use]
    pub const fn with_status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Per-article transport abstraction (so we can inject fakes in tests).
#[async_trait]
pub trait WmPageviews: Send + Sync {
    /// Perform the per-article daily request for `title` over `range`.
    ///
    /// Only transport failures are errors here; any HTTP status is returned as-is.
    async fn per_article(
        &self,
        title: &PageTitle,
        range: &DateRange,
    ) -> Result<RawResponse, PageviewsError>;
}

/// Real adapter backed by a `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    cfg: WikimediaConfig,
}

impl RealAdapter {
    /// Build an adapter with a fresh HTTP client configured from `cfg`.
    ///
    /// # Errors
    /// Returns a `Connector` error if the HTTP client cannot be constructed.
    pub fn new(cfg: WikimediaConfig) -> Result<Self, PageviewsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| PageviewsError::connector(CONNECTOR_NAME, e.to_string()))?;
        Ok(Self { http, cfg })
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn with_client(http: reqwest::Client, cfg: WikimediaConfig) -> Self {
        Self { http, cfg }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &WikimediaConfig {
        &self.cfg
    }

    /// Build the request URL for `title` over `range`.
    ///
    /// The title is pushed as a single path segment, so characters such as `/`
    /// are percent-encoded.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured base URL is not a usable base.
    pub fn endpoint(&self, title: &PageTitle, range: &DateRange) -> Result<Url, PageviewsError> {
        endpoint(&self.cfg, title, range)
    }
}

/// Build the per-article URL for `cfg`, `title`, and `range`.
///
/// # Errors
/// Returns `InvalidArg` if `cfg.api_base_url` does not parse or cannot be a base.
pub fn endpoint(
    cfg: &WikimediaConfig,
    title: &PageTitle,
    range: &DateRange,
) -> Result<Url, PageviewsError> {
    let (start, end) = (range.start_compact(), range.end_compact());
    let mut url = Url::parse(&cfg.api_base_url)
        .map_err(|e| PageviewsError::InvalidArg(format!("api base url: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| {
            PageviewsError::InvalidArg(format!(
                "api base url cannot be a base: {}",
                cfg.api_base_url
            ))
        })?
        .pop_if_empty()
        .extend([
            cfg.project.as_str(),
            cfg.access.as_str(),
            cfg.agent.as_str(),
            title.as_str(),
            cfg.granularity.as_str(),
            start.as_str(),
            end.as_str(),
        ]);
    Ok(url)
}

#[async_trait]
impl WmPageviews for RealAdapter {
    async fn per_article(
        &self,
        title: &PageTitle,
        range: &DateRange,
    ) -> Result<RawResponse, PageviewsError> {
        let url = self.endpoint(title, range)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "requesting per-article pageviews");

        let resp = self
            .http
            .get(url)
            .header(USER_AGENT, self.cfg.user_agent.as_str())
            .send()
            .await
            .map_err(|e| map_reqwest_err(&e, title))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| map_reqwest_err(&e, title))?;
        Ok(RawResponse { status, body })
    }
}

fn map_reqwest_err(e: &reqwest::Error, title: &PageTitle) -> PageviewsError {
    if e.is_timeout() {
        return PageviewsError::connector(
            CONNECTOR_NAME,
            format!("timed out: pageviews for {title}"),
        );
    }
    PageviewsError::connector(CONNECTOR_NAME, format!("pageviews for {title}: {e}"))
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn WmPageviews {
    /// Build a `WmPageviews` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn WmPageviews>
    where
        F: Send
            + Sync
            + 'static
            + Fn(PageTitle, DateRange) -> Result<RawResponse, PageviewsError>,
    {
        struct FnPageviews<F>(F);
        #[async_trait]
        impl<F> WmPageviews for FnPageviews<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(PageTitle, DateRange) -> Result<RawResponse, PageviewsError>,
        {
            async fn per_article(
                &self,
                title: &PageTitle,
                range: &DateRange,
            ) -> Result<RawResponse, PageviewsError> {
                (self.0)(title.clone(), *range)
            }
        }
        Arc::new(FnPageviews(f))
    }
}
