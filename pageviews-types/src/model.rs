//! Domain data model: article titles, date ranges, daily records, merged tables.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PageviewsError;

/// Compact date format used by the upstream API (`YYYYMMDD`).
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// Percent-decoded identifier of an encyclopedia article (e.g. `Foo_Bar`).
///
/// Invariant: never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageTitle(String);

impl PageTitle {
    /// Build a title from an already-decoded string.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `title` is empty.
    pub fn new(title: impl Into<String>) -> Result<Self, PageviewsError> {
        let title = title.into();
        if title.is_empty() {
            return Err(PageviewsError::InvalidArg(
                "page title must not be empty".to_string(),
            ));
        }
        Ok(Self(title))
    }

    /// Borrow the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PageTitle {
    type Error = PageviewsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageTitle> for String {
    fn from(t: PageTitle) -> Self {
        t.0
    }
}

/// Inclusive calendar date range.
///
/// `start <= end` is expected but deliberately not enforced; an inverted range
/// is passed through to the upstream unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from two calendar dates.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when `start` is after `end`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Whether `date` falls inside the range (always false for inverted ranges).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `start` formatted as `YYYYMMDD`.
    #[must_use]
    pub fn start_compact(&self) -> String {
        self.start.format(COMPACT_DATE_FORMAT).to_string()
    }

    /// `end` formatted as `YYYYMMDD`.
    #[must_use]
    pub fn end_compact(&self) -> String {
        self.end.format(COMPACT_DATE_FORMAT).to_string()
    }
}

/// One day of views for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageviewRecord {
    /// Calendar day.
    pub date: NaiveDate,
    /// Views recorded on that day.
    pub views: u64,
}

/// Daily views for one article, in upstream order.
///
/// Days missing upstream are missing here too; nothing is zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageviewSeries {
    /// Article the series belongs to.
    pub title: PageTitle,
    /// Records as received.
    pub records: Vec<PageviewRecord>,
}

impl PageviewSeries {
    /// An empty series for `title`.
    #[must_use]
    pub const fn empty(title: PageTitle) -> Self {
        Self {
            title,
            records: Vec::new(),
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One row of a [`MergedSeries`].
///
/// `None` means the page had no record for the date (not zero views).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRow {
    /// Calendar day.
    pub date: NaiveDate,
    /// Views for page A.
    pub views_a: Option<u64>,
    /// Views for page B.
    pub views_b: Option<u64>,
    /// Synthetic (demo) share count for page A.
    pub shares_a: Option<u64>,
    /// Synthetic (demo) share count for page B.
    pub shares_b: Option<u64>,
}

impl MergedRow {
    /// A row carrying views only; shares are derived later.
    #[must_use]
    pub const fn views(date: NaiveDate, views_a: Option<u64>, views_b: Option<u64>) -> Self {
        Self {
            date,
            views_a,
            views_b,
            shares_a: None,
            shares_b: None,
        }
    }
}

/// Date-keyed outer join of two pageview series plus synthetic share columns.
///
/// Rows are sorted by date ascending. The table is immutable once built.
/// The share columns are fabricated demo data, not a real metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MergedSeriesRepr")]
pub struct MergedSeries {
    title_a: PageTitle,
    title_b: PageTitle,
    rows: Vec<MergedRow>,
}

// Deserialized tables go through `MergedSeries::new` so rows end up sorted.
#[derive(Deserialize)]
struct MergedSeriesRepr {
    title_a: PageTitle,
    title_b: PageTitle,
    rows: Vec<MergedRow>,
}

impl From<MergedSeriesRepr> for MergedSeries {
    fn from(r: MergedSeriesRepr) -> Self {
        Self::new(r.title_a, r.title_b, r.rows)
    }
}

impl MergedSeries {
    /// Build a table; rows are stably sorted by date.
    #[must_use]
    pub fn new(title_a: PageTitle, title_b: PageTitle, mut rows: Vec<MergedRow>) -> Self {
        rows.sort_by_key(|r| r.date);
        Self {
            title_a,
            title_b,
            rows,
        }
    }

    /// Title of page A.
    #[must_use]
    pub const fn title_a(&self) -> &PageTitle {
        &self.title_a
    }

    /// Title of page B.
    #[must_use]
    pub const fn title_b(&self) -> &PageTitle {
        &self.title_b
    }

    /// All rows in date order.
    #[must_use]
    pub fn rows(&self) -> &[MergedRow] {
        &self.rows
    }

    /// Consume the table, returning `(title_a, title_b, rows)`.
    #[must_use]
    pub fn into_parts(self) -> (PageTitle, PageTitle, Vec<MergedRow>) {
        (self.title_a, self.title_b, self.rows)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names: `date`, `views_<A>`, `views_<B>`, `shares_<A>`, `shares_<B>`.
    ///
    /// Identical titles produce colliding names; that is left to the caller.
    #[must_use]
    pub fn column_names(&self) -> [String; 5] {
        [
            "date".to_string(),
            format!("views_{}", self.title_a),
            format!("views_{}", self.title_b),
            format!("shares_{}", self.title_a),
            format!("shares_{}", self.title_b),
        ]
    }

    /// The date column.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.date).collect()
    }

    /// Views column for page A.
    #[must_use]
    pub fn views_a(&self) -> Vec<Option<u64>> {
        self.rows.iter().map(|r| r.views_a).collect()
    }

    /// Views column for page B.
    #[must_use]
    pub fn views_b(&self) -> Vec<Option<u64>> {
        self.rows.iter().map(|r| r.views_b).collect()
    }

    /// Synthetic shares column for page A.
    #[must_use]
    pub fn shares_a(&self) -> Vec<Option<u64>> {
        self.rows.iter().map(|r| r.shares_a).collect()
    }

    /// Synthetic shares column for page B.
    #[must_use]
    pub fn shares_b(&self) -> Vec<Option<u64>> {
        self.rows.iter().map(|r| r.shares_b).collect()
    }
}
