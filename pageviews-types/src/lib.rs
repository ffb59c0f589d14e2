//! Pageviews data model, configuration primitives, and the unified error type.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod model;
mod reports;

pub use config::{
    DEFAULT_API_BASE_URL, DEFAULT_ARTICLE_PREFIX, DEFAULT_SHARE_SEED, DEFAULT_USER_AGENT,
    FetchStrategy, PageviewsConfig, TitleConfig, WikimediaConfig,
};
pub use connector::ConnectorKey;
pub use error::PageviewsError;
pub use model::{
    COMPACT_DATE_FORMAT, DateRange, MergedRow, MergedSeries, PageTitle, PageviewRecord,
    PageviewSeries,
};
pub use reports::{Comparison, PageviewsReport};
