use pageviews_core::{
    Comparison, DateRange, FetchStrategy, PageTitle, PageviewsError, PageviewsReport,
    derive_shares, merge_series,
};

use crate::Pageviews;

impl Pageviews {
    /// Extract the article title from a URL using the configured rules.
    ///
    /// Returns `None` for anything that is not an article URL. No network access.
    #[must_use]
    pub fn extract_title(&self, url: &str) -> Option<PageTitle> {
        self.titles.extract(url)
    }

    /// Compare daily views of two articles over `range`.
    ///
    /// Steps:
    /// - Extract both titles; if either fails, return `BadInput` naming the
    ///   offending URLs before any request is made.
    /// - Fetch A and B (in order, or concurrently per `FetchStrategy`).
    /// - If either series is empty, return `NoData` with the per-page warnings.
    /// - Outer-join by date (sorted ascending) and add synthetic share columns
    ///   seeded with `share_seed`, page A before page B.
    ///
    /// # Errors
    /// `BadInput` or `NoData` as described above. Per-page failures never escape
    /// on their own; they end up in `NoData::warnings`, or in
    /// `Comparison::warnings` when another connector served the page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pageviews::router::compare::compare",
            skip(self, range),
            fields(start = %range.start(), end = %range.end(), seed = self.cfg.share_seed),
        )
    )]
    pub async fn compare(
        &self,
        url_a: &str,
        url_b: &str,
        range: &DateRange,
    ) -> Result<Comparison, PageviewsError> {
        let (title_a, title_b) = match (self.extract_title(url_a), self.extract_title(url_b)) {
            (Some(a), Some(b)) => (a, b),
            (a, b) => {
                let bad = [(url_a, a.is_none()), (url_b, b.is_none())]
                    .into_iter()
                    .filter_map(|(u, missing)| missing.then_some(u));
                let err = PageviewsError::bad_input(bad);
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "rejected input");
                return Err(err);
            }
        };

        let (report_a, report_b) = self.fetch_pair(&title_a, &title_b, range).await;

        let mut warnings = report_a.warnings;
        warnings.extend(report_b.warnings);

        if report_a.series.is_empty() || report_b.series.is_empty() {
            let titles = [&report_a.series, &report_b.series]
                .into_iter()
                .filter(|s| s.is_empty())
                .map(|s| s.title.to_string())
                .collect();
            let err = PageviewsError::NoData { titles, warnings };
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "comparison aborted");
            return Err(err);
        }

        let merged = merge_series(&report_a.series, &report_b.series);
        let series = derive_shares(merged, self.cfg.share_seed);
        #[cfg(feature = "tracing")]
        tracing::debug!(rows = series.len(), "comparison built");
        Ok(Comparison { series, warnings })
    }

    async fn fetch_pair(
        &self,
        title_a: &PageTitle,
        title_b: &PageTitle,
        range: &DateRange,
    ) -> (PageviewsReport, PageviewsReport) {
        match self.cfg.fetch_strategy {
            FetchStrategy::Concurrent => {
                futures::future::join(
                    self.pageviews(title_a, range),
                    self.pageviews(title_b, range),
                )
                .await
            }
            _ => {
                let a = self.pageviews(title_a, range).await;
                let b = self.pageviews(title_b, range).await;
                (a, b)
            }
        }
    }
}
