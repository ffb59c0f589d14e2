use std::time::Duration;

use pageviews::{FetchStrategy, Pageviews};

use crate::helpers::{MockConnector, january, series, wiki_url};

fn slow_mock() -> std::sync::Arc<MockConnector> {
    MockConnector::builder()
        .delay(Duration::from_millis(20))
        .returns_series(series("A", &[(1, 100), (2, 200), (4, 400)]))
        .returns_series(series("B", &[(2, 20), (3, 30)]))
        .build()
}

#[tokio::test]
async fn concurrent_matches_sequential() {
    let seq_mock = slow_mock();
    let sequential = Pageviews::builder()
        .with_connector(seq_mock.clone())
        .fetch_strategy(FetchStrategy::Sequential)
        .build()
        .unwrap()
        .compare(&wiki_url("A"), &wiki_url("B"), &january())
        .await
        .unwrap();

    let conc_mock = slow_mock();
    let concurrent = Pageviews::builder()
        .with_connector(conc_mock.clone())
        .fetch_strategy(FetchStrategy::Concurrent)
        .build()
        .unwrap()
        .compare(&wiki_url("A"), &wiki_url("B"), &january())
        .await
        .unwrap();

    assert_eq!(sequential.series, concurrent.series);
    assert_eq!(sequential.series.title_a().as_str(), "A");
    assert_eq!(concurrent.series.title_b().as_str(), "B");
    assert_eq!(seq_mock.calls(), 2);
    assert_eq!(conc_mock.calls(), 2);
}

#[tokio::test]
async fn sequential_fetches_a_before_b() {
    let mock = slow_mock();
    Pageviews::builder()
        .with_connector(mock.clone())
        .build()
        .unwrap()
        .compare(&wiki_url("B"), &wiki_url("A"), &january())
        .await
        .unwrap();
    assert_eq!(mock.requested(), vec!["B", "A"]);
}

#[tokio::test(start_paused = true)]
async fn concurrent_overlaps_the_two_requests() {
    let mock = MockConnector::builder()
        .delay(Duration::from_secs(5))
        .returns_series(series("A", &[(1, 1)]))
        .returns_series(series("B", &[(1, 2)]))
        .build();
    let pv = Pageviews::builder()
        .with_connector(mock)
        .fetch_strategy(FetchStrategy::Concurrent)
        .build()
        .unwrap();

    let started = tokio::time::Instant::now();
    pv.compare(&wiki_url("A"), &wiki_url("B"), &january())
        .await
        .unwrap();
    assert!(started.elapsed() < Duration::from_secs(10));
}
