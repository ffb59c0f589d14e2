//! Plain-text rendering of merged tables and charts.

use std::fmt::Write;

use pageviews::MergedSeries;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the merged table with one row per date. Absent values print as `-`.
#[must_use]
pub fn table(series: &MergedSeries) -> String {
    let names = series.column_names();
    let widths: Vec<usize> = names.iter().map(|n| n.len().max(10)).collect();

    let mut out = String::new();
    let header: Vec<String> = names
        .iter()
        .zip(&widths)
        .map(|(n, w)| format!("{n:<w$}"))
        .collect();
    let _ = writeln!(out, "{}", header.join(" | "));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-|-"));

    for row in series.rows() {
        let cells = [
            row.date.format("%Y-%m-%d").to_string(),
            cell(row.views_a),
            cell(row.views_b),
            cell(row.shares_a),
            cell(row.shares_b),
        ];
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join(" | "));
    }
    out
}

fn cell(v: Option<u64>) -> String {
    v.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// One character per value, scaled between the series minimum and maximum.
/// Absent values render as a space.
#[must_use]
pub fn sparkline(values: &[Option<u64>]) -> String {
    let present = values.iter().flatten();
    let (Some(min), Some(max)) = (present.clone().min(), present.max()) else {
        return " ".repeat(values.len());
    };
    let span = max - min;
    values
        .iter()
        .map(|v| match v {
            None => ' ',
            Some(_) if span == 0 => BARS[BARS.len() / 2],
            Some(v) => {
                let top = BARS.len() - 1;
                let idx = u128::from(v - min) * top as u128 / u128::from(span);
                BARS[usize::try_from(idx).map_or(top, |i| i.min(top))]
            }
        })
        .collect()
}

/// A titled chart with one labelled sparkline per series.
#[must_use]
pub fn chart(title: &str, lines: &[(String, Vec<Option<u64>>)]) -> String {
    let label_width = lines.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "\n## {title}");
    for (label, values) in lines {
        let lo = values.iter().flatten().min();
        let hi = values.iter().flatten().max();
        let _ = write!(out, "{label:<label_width$}  {}", sparkline(values));
        if let (Some(lo), Some(hi)) = (lo, hi) {
            let _ = write!(out, "  [{lo}..{hi}]");
        }
        out.push('\n');
    }
    out
}

/// Pageview and simulated-share charts for a comparison.
#[must_use]
pub fn charts(series: &MergedSeries) -> String {
    let a = series.title_a().to_string();
    let b = series.title_b().to_string();
    let mut out = chart(
        "Wikipedia Pageviews Over Time",
        &[(a.clone(), series.views_a()), (b.clone(), series.views_b())],
    );
    out.push_str(&chart(
        "Simulated Share Counts Over Time",
        &[
            (format!("Shares: {a}"), series.shares_a()),
            (format!("Shares: {b}"), series.shares_b()),
        ],
    ));
    out
}
