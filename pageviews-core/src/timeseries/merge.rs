use std::collections::{BTreeMap, btree_map::Entry};

use chrono::NaiveDate;

use crate::{MergedRow, MergedSeries, PageviewRecord, PageviewSeries};

/// Outer join two daily record sequences by date.
///
/// - Every date present in either input appears exactly once.
/// - A date missing from one side leaves that side's views as `None`.
/// - Rows are returned sorted by date ascending.
/// - Duplicate dates within one input: the first record wins.
/// - Share columns are left empty; see [`crate::derive_shares`].
#[must_use]
pub fn outer_join(a: &[PageviewRecord], b: &[PageviewRecord]) -> Vec<MergedRow> {
    let mut rows: BTreeMap<NaiveDate, MergedRow> = BTreeMap::new();

    for r in a {
        rows.entry(r.date)
            .or_insert_with(|| MergedRow::views(r.date, Some(r.views), None));
    }

    for r in b {
        match rows.entry(r.date) {
            Entry::Vacant(v) => {
                v.insert(MergedRow::views(r.date, None, Some(r.views)));
            }
            Entry::Occupied(mut o) => {
                let row = o.get_mut();
                if row.views_b.is_none() {
                    row.views_b = Some(r.views);
                }
            }
        }
    }

    rows.into_values().collect()
}

/// Outer join two series into a [`MergedSeries`] titled after its inputs.
#[must_use]
pub fn merge_series(a: &PageviewSeries, b: &PageviewSeries) -> MergedSeries {
    MergedSeries::new(
        a.title.clone(),
        b.title.clone(),
        outer_join(&a.records, &b.records),
    )
}
