use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pageviews workspace.
///
/// Covers input validation, upstream HTTP failures, malformed payloads, and the
/// pipeline-level "no data" outcome. Errors are `Clone` + serde so they can be
/// carried as warnings inside reports.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PageviewsError {
    /// One or more URLs could not be turned into an article title.
    #[error("could not extract page title from: {}", urls.join(", "))]
    BadInput {
        /// The offending URLs, verbatim.
        urls: Vec<String>,
    },

    /// The upstream API answered with a non-success status.
    #[error("error fetching data for {title}: HTTP {status}")]
    Upstream {
        /// Article title the request was made for.
        title: String,
        /// HTTP status code returned by the upstream.
        status: u16,
    },

    /// One or both series came back empty, so no comparison can be built.
    #[error("no data available for: {}", titles.join(", "))]
    NoData {
        /// Titles whose series were empty.
        titles: Vec<String>,
        /// Per-page failures that caused (or accompanied) the empty series.
        warnings: Vec<PageviewsError>,
    },

    /// The upstream body did not have the expected JSON shape.
    #[error("malformed response for {title}: {msg}")]
    MalformedResponse {
        /// Article title the request was made for.
        title: String,
        /// Description of what was wrong with the body.
        msg: String,
    },

    /// A connector failed before a status could be read (transport errors etc.).
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability label describing what was requested (e.g. "daily-views").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// Issues with derived data (conversion, export).
    #[error("data issue: {0}")]
    Data(String),
}

impl PageviewsError {
    /// Helper: build a `BadInput` error from the URLs that failed extraction.
    pub fn bad_input<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::BadInput {
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }

    /// Helper: build an `Upstream` error for a title and status code.
    pub fn upstream(title: impl Into<String>, status: u16) -> Self {
        Self::Upstream {
            title: title.into(),
            status,
        }
    }

    /// Helper: build a `MalformedResponse` error.
    pub fn malformed(title: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::MalformedResponse {
            title: title.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true for per-page failures that the pipeline downgrades to an
    /// empty series plus a warning.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. }
                | Self::MalformedResponse { .. }
                | Self::Connector { .. }
                | Self::RequestTimeout { .. }
        )
    }

    /// Flatten nested `NoData` warnings into a plain vector.
    ///
    /// The `NoData` wrapper itself is dropped; other variants are kept as-is.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::NoData { warnings, .. } if !warnings.is_empty() => {
                warnings.into_iter().flat_map(Self::flatten).collect()
            }
            other => vec![other],
        }
    }
}
