//! Upstream JSON shape of the per-article endpoint and its normalization.

use chrono::NaiveDate;
use pageviews_core::{
    COMPACT_DATE_FORMAT, PageTitle, PageviewRecord, PageviewSeries, PageviewsError,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PerArticleBody {
    // A body without `items` is an empty result, not an error.
    #[serde(default)]
    items: Vec<PerArticleItem>,
}

#[derive(Debug, Deserialize)]
struct PerArticleItem {
    timestamp: String,
    views: u64,
}

/// Parse a successful per-article body into a series, keeping item order.
///
/// Each item's date is the first eight characters of its `timestamp`
/// (`YYYYMMDDHH` upstream).
///
/// # Errors
/// Returns `MalformedResponse` for invalid JSON, items lacking `timestamp` or
/// `views`, or timestamps that do not start with a `YYYYMMDD` date.
pub fn parse_per_article(title: &PageTitle, body: &str) -> Result<PageviewSeries, PageviewsError> {
    let parsed: PerArticleBody = serde_json::from_str(body)
        .map_err(|e| PageviewsError::malformed(title.as_str(), e.to_string()))?;

    let records = parsed
        .items
        .into_iter()
        .map(|item| {
            let date = item
                .timestamp
                .get(..8)
                .and_then(|s| NaiveDate::parse_from_str(s, COMPACT_DATE_FORMAT).ok())
                .ok_or_else(|| {
                    PageviewsError::malformed(
                        title.as_str(),
                        format!("bad timestamp '{}'", item.timestamp),
                    )
                })?;
            Ok(PageviewRecord {
                date,
                views: item.views,
            })
        })
        .collect::<Result<Vec<_>, PageviewsError>>()?;

    Ok(PageviewSeries {
        title: title.clone(),
        records,
    })
}
