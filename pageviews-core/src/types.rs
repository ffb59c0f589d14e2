//! Re-export of foundational types from `pageviews-types`.
// Consolidated re-exports so downstream crates can depend on `pageviews-core` only

pub use pageviews_types::{
    COMPACT_DATE_FORMAT, Comparison, ConnectorKey, DEFAULT_API_BASE_URL, DEFAULT_ARTICLE_PREFIX,
    DEFAULT_SHARE_SEED, DEFAULT_USER_AGENT, DateRange, FetchStrategy, MergedRow, MergedSeries,
    PageTitle, PageviewRecord, PageviewSeries, PageviewsConfig, PageviewsError, PageviewsReport,
    TitleConfig, WikimediaConfig,
};
