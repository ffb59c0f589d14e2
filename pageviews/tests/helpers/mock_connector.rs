#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pageviews::{DateRange, PageTitle, PageviewSeries, PageviewsConnector, PageviewsError};
use pageviews_core::connector::DailyViewsProvider;
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
///
/// Counts every `daily_views` call so tests can assert that no request was made.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub daily_views: bool,
    pub series: HashMap<String, PageviewSeries>,
    pub views_fn: Option<
        Arc<dyn Fn(&PageTitle, &DateRange) -> Result<PageviewSeries, PageviewsError> + Send + Sync>,
    >,
    calls: AtomicUsize,
    log: std::sync::Mutex<Vec<String>>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    /// Number of `daily_views` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Titles requested so far, in the order the calls started.
    pub fn requested(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl PageviewsConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_daily_views_provider(&self) -> Option<&dyn DailyViewsProvider> {
        if self.daily_views {
            Some(self as &dyn DailyViewsProvider)
        } else {
            None
        }
    }
}

#[async_trait]
impl DailyViewsProvider for MockConnector {
    async fn daily_views(
        &self,
        title: &PageTitle,
        range: &DateRange,
    ) -> Result<PageviewSeries, PageviewsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push(title.to_string());
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }

        if let Some(f) = &self.views_fn {
            return (f)(title, range);
        }

        self.series
            .get(title.as_str())
            .cloned()
            .ok_or_else(|| PageviewsError::upstream(title.as_str(), 404))
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    delay_ms: u64,
    daily_views: bool,
    series: HashMap<String, PageviewSeries>,
    views_fn: Option<
        Arc<dyn Fn(&PageTitle, &DateRange) -> Result<PageviewSeries, PageviewsError> + Send + Sync>,
    >,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            daily_views: true,
            series: HashMap::new(),
            views_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Serve `series` for its own title; other titles answer 404.
    pub fn returns_series(mut self, series: PageviewSeries) -> Self {
        self.series.insert(series.title.to_string(), series);
        self
    }

    pub fn with_views_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&PageTitle, &DateRange) -> Result<PageviewSeries, PageviewsError>
            + Send
            + Sync
            + 'static,
    {
        self.views_fn = Some(Arc::new(f));
        self
    }

    /// Do not advertise the daily-views capability at all.
    pub fn without_daily_views(mut self) -> Self {
        self.daily_views = false;
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delay_ms: self.delay_ms,
            daily_views: self.daily_views,
            series: self.series,
            views_fn: self.views_fn,
            calls: AtomicUsize::new(0),
            log: std::sync::Mutex::new(Vec::new()),
        })
    }
}
