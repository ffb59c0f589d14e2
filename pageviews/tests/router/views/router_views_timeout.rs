use std::time::Duration;

use pageviews::{Pageviews, PageviewsError};

use crate::helpers::{MockConnector, january, series, title, wiki_url};

#[tokio::test(start_paused = true)]
async fn slow_connector_is_cut_off_by_request_timeout() {
    let slow = MockConnector::builder()
        .delay(Duration::from_secs(30))
        .returns_series(series("A", &[(1, 10)]))
        .build();
    let pv = Pageviews::builder()
        .with_connector(slow)
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let report = pv.pageviews(&title("A"), &january()).await;

    assert!(report.is_empty());
    assert_eq!(
        report.warnings,
        vec![PageviewsError::request_timeout("daily-views")]
    );
}

#[tokio::test(start_paused = true)]
async fn timeout_falls_back_to_next_connector() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(30))
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .returns_series(series("A", &[(1, 10)]))
        .returns_series(series("B", &[(1, 20)]))
        .build();
    let pv = Pageviews::builder()
        .with_connector(slow)
        .with_connector(fast)
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let cmp = pv
        .compare(&wiki_url("A"), &wiki_url("B"), &january())
        .await
        .unwrap();

    assert_eq!(cmp.series.len(), 1);
    assert_eq!(cmp.warnings.len(), 2);
    assert!(
        cmp.warnings
            .iter()
            .all(|w| matches!(w, PageviewsError::RequestTimeout { .. }))
    );
}

#[tokio::test]
async fn no_deadline_waits_for_the_connector() {
    let slow = MockConnector::builder()
        .delay(Duration::from_millis(50))
        .returns_series(series("A", &[(1, 10)]))
        .build();
    let pv = Pageviews::builder().with_connector(slow).build().unwrap();

    let report = pv.pageviews(&title("A"), &january()).await;
    assert_eq!(report.series.len(), 1);
}
