//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default per-article endpoint of the Wikimedia REST API.
pub const DEFAULT_API_BASE_URL: &str =
    "https://wikimedia.org/api/rest_v1/metrics/pageviews/per-article";

/// Default identifying user agent sent with every upstream request.
pub const DEFAULT_USER_AGENT: &str = "pageviews-rs/0.1 (example@example.com)";

/// Path prefix of canonical article URLs.
pub const DEFAULT_ARTICLE_PREFIX: &str = "/wiki/";

/// Seed used for synthetic share noise unless overridden.
pub const DEFAULT_SHARE_SEED: u64 = 42;

/// How the two per-page fetches of a comparison are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Fetch page A, then page B.
    #[default]
    Sequential,
    /// Fetch both pages concurrently and join; results keep A/B order.
    Concurrent,
}

/// Upstream request scope for the Wikimedia connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikimediaConfig {
    /// Base URL up to and including `per-article`.
    pub api_base_url: String,
    /// Wiki project, e.g. `en.wikipedia`.
    pub project: String,
    /// Access scope, e.g. `all-access`.
    pub access: String,
    /// Agent scope, e.g. `all-agents`.
    pub agent: String,
    /// Granularity segment; this workspace only consumes `daily`.
    pub granularity: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Optional per-request timeout applied by the HTTP client.
    pub timeout: Option<Duration>,
}

impl Default for WikimediaConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            project: "en.wikipedia".to_string(),
            access: "all-access".to_string(),
            agent: "all-agents".to_string(),
            granularity: "daily".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Rules for turning an article URL into a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleConfig {
    /// Literal path prefix preceding the title.
    pub article_prefix: String,
    /// Hosts accepted by extraction (case-insensitive). Empty accepts any host.
    pub allowed_hosts: Vec<String>,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            article_prefix: DEFAULT_ARTICLE_PREFIX.to_string(),
            allowed_hosts: Vec::new(),
        }
    }
}

/// Global configuration for the `Pageviews` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageviewsConfig {
    /// Title extraction rules.
    pub titles: TitleConfig,
    /// Seed for the synthetic share noise; reset on every comparison.
    pub share_seed: u64,
    /// Scheduling of the two per-page fetches.
    pub fetch_strategy: FetchStrategy,
    /// Optional deadline for each per-page fetch. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for PageviewsConfig {
    fn default() -> Self {
        Self {
            titles: TitleConfig::default(),
            share_seed: DEFAULT_SHARE_SEED,
            fetch_strategy: FetchStrategy::default(),
            request_timeout: None,
        }
    }
}
