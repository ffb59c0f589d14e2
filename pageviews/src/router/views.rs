use pageviews_core::{DateRange, PageTitle, PageviewSeries, PageviewsError, PageviewsReport};

use crate::Pageviews;
use crate::core::tag_err;

const CAPABILITY: &str = "daily-views";

impl Pageviews {
    /// Fetch daily views for one article.
    ///
    /// Never fails: connectors are tried in registration order and the first
    /// success is returned. Each failure along the way (non-success status,
    /// malformed body, transport error, deadline) is recorded in `warnings`; if
    /// nothing succeeds the series is empty. When no registered connector offers
    /// daily views the only warning is `Unsupported`.
    ///
    /// The range is passed through unchanged, even when inverted.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pageviews::router::views::pageviews",
            skip(self, title, range),
            fields(title = %title, start = %range.start(), end = %range.end()),
        )
    )]
    pub async fn pageviews(&self, title: &PageTitle, range: &DateRange) -> PageviewsReport {
        let mut warnings: Vec<PageviewsError> = Vec::new();
        let mut attempted_any = false;

        for c in &self.connectors {
            let Some(provider) = c.as_daily_views_provider() else {
                continue;
            };
            attempted_any = true;
            let fut = provider.daily_views(title, range);
            match Self::call_with_deadline(CAPABILITY, self.cfg.request_timeout, fut).await {
                Ok(series) => return PageviewsReport { series, warnings },
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(connector = c.name(), error = %e, "pageviews fetch failed");
                    warnings.push(tag_err(c.name(), e));
                }
            }
        }

        if !attempted_any {
            warnings.push(PageviewsError::unsupported(CAPABILITY));
        }
        PageviewsReport {
            series: PageviewSeries::empty(title.clone()),
            warnings,
        }
    }
}
