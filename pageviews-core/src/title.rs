//! Turn article URLs such as `https://en.wikipedia.org/wiki/Foo_Bar` into [`PageTitle`]s.
//!
//! Extraction never touches the network and never fails loudly: anything that
//! does not look like an article URL yields `None`.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::{PageTitle, TitleConfig};

// Only used to resolve path-only input such as `/wiki/Foo`.
const RELATIVE_BASE: &str = "http://localhost/";

/// Extract a title using the default rules (`/wiki/` prefix, any host).
///
/// ```
/// use pageviews_core::extract_page_title;
///
/// let t = extract_page_title("https://en.wikipedia.org/wiki/Python_(programming_language)");
/// assert_eq!(t.unwrap().as_str(), "Python_(programming_language)");
/// assert!(extract_page_title("https://en.wikipedia.org/w/index.php").is_none());
/// ```
#[must_use]
pub fn extract_page_title(url: &str) -> Option<PageTitle> {
    TitleExtractor::default().extract(url)
}

/// Configurable article-URL parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleExtractor {
    article_prefix: String,
    allowed_hosts: Vec<String>,
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self::new(&TitleConfig::default())
    }
}

impl TitleExtractor {
    /// Build an extractor from configuration.
    #[must_use]
    pub fn new(cfg: &TitleConfig) -> Self {
        Self {
            article_prefix: cfg.article_prefix.clone(),
            allowed_hosts: cfg.allowed_hosts.clone(),
        }
    }

    /// Restrict extraction to the given hosts (case-insensitive).
    #[must_use]
    pub fn with_allowed_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Extract the percent-decoded title from `raw`.
    ///
    /// The title is the text between the first occurrence of the article prefix
    /// and the next occurrence of it (or the end of the path). Returns `None`
    /// when the input is not a URL, the path does not start with the prefix,
    /// the host is not allowed, or the title would be empty.
    #[must_use]
    pub fn extract(&self, raw: &str) -> Option<PageTitle> {
        if self.article_prefix.is_empty() {
            return None;
        }
        let (url, relative) = parse_lenient(raw)?;
        if !self.host_allowed(&url, relative) {
            #[cfg(feature = "tracing")]
            tracing::debug!(url = raw, "host not in allowed set");
            return None;
        }

        let prefix = self.article_prefix.as_str();
        let Some(rest) = url.path().strip_prefix(prefix) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(url = raw, prefix, "path does not start with article prefix");
            return None;
        };
        let encoded = rest.split(prefix).next()?;
        let decoded = percent_decode_str(encoded).decode_utf8_lossy();
        PageTitle::new(decoded.into_owned()).ok()
    }

    fn host_allowed(&self, url: &Url, relative: bool) -> bool {
        if self.allowed_hosts.is_empty() {
            return true;
        }
        if relative {
            return false;
        }
        url.host_str().is_some_and(|host| {
            self.allowed_hosts
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(host))
        })
    }
}

fn parse_lenient(raw: &str) -> Option<(Url, bool)> {
    match Url::parse(raw) {
        Ok(url) => Some((url, false)),
        Err(url::ParseError::RelativeUrlWithoutBase) if raw.starts_with('/') => {
            let base = Url::parse(RELATIVE_BASE).ok()?;
            // `//host/path` resolves to a real host; a plain `/path` keeps the placeholder.
            let joined = base.join(raw).ok()?;
            let relative = !raw.starts_with("//");
            Some((joined, relative))
        }
        Err(_) => None,
    }
}
