use chrono::{Datelike, NaiveDate};
use pageviews_core::PageviewRecord;

// All fixtures cover January 2022.
const YEAR: i32 = 2022;
const MONTH: u32 = 1;
const DAYS: u32 = 31;

pub fn by_title(title: &str) -> Option<Vec<PageviewRecord>> {
    match title {
        "Python_(programming_language)" => Some(build(|day| 18_000 + u64::from(day * 137 % 4_000))),
        "Java_(programming_language)" => Some(build(|day| 9_500 + u64::from(day * 89 % 2_500))),
        "Rust_(programming_language)" => Some(build(|day| 4_000 + u64::from(day * 53 % 900))),
        // Every other day only, to exercise gaps in the outer join.
        "Sparse_page" => Some(
            build(|day| u64::from(day) * 10)
                .into_iter()
                .filter(|r| r.date.day() % 2 == 1)
                .collect(),
        ),
        "Empty_page" => Some(Vec::new()),
        _ => None,
    }
}

fn build(views: impl Fn(u32) -> u64) -> Vec<PageviewRecord> {
    (1..=DAYS)
        .filter_map(|day| {
            NaiveDate::from_ymd_opt(YEAR, MONTH, day).map(|date| PageviewRecord {
                date,
                views: views(day),
            })
        })
        .collect()
}
