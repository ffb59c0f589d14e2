use pageviews::{Pageviews, PageviewsError};

use crate::helpers::{MockConnector, january, series, title};

#[tokio::test]
async fn first_successful_connector_serves_the_page() {
    let failing = MockConnector::builder()
        .name("failing")
        .with_views_fn(|_, _| Err(PageviewsError::Data("boom".into())))
        .build();
    let ok = MockConnector::builder()
        .name("ok")
        .returns_series(series("A", &[(1, 10), (2, 20)]))
        .build();
    let pv = Pageviews::builder()
        .with_connector(failing.clone())
        .with_connector(ok.clone())
        .build()
        .unwrap();

    let report = pv.pageviews(&title("A"), &january()).await;

    assert_eq!(report.series.len(), 2);
    assert_eq!(
        report.warnings,
        vec![PageviewsError::connector("failing", "data issue: boom")]
    );
    assert_eq!((failing.calls(), ok.calls()), (1, 1));
}

#[tokio::test]
async fn later_connectors_are_not_called_after_success() {
    let first = MockConnector::builder()
        .name("first")
        .returns_series(series("A", &[(1, 10)]))
        .build();
    let second = MockConnector::builder().name("second").build();
    let pv = Pageviews::builder()
        .with_connector(first)
        .with_connector(second.clone())
        .build()
        .unwrap();

    let report = pv.pageviews(&title("A"), &january()).await;
    assert!(report.warnings.is_empty());
    assert_eq!(second.calls(), 0);
}

#[tokio::test]
async fn all_failures_give_empty_series_and_every_warning() {
    let a = MockConnector::builder().name("a").build();
    let b = MockConnector::builder().name("b").build();
    let pv = Pageviews::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let report = pv.pageviews(&title("Gone"), &january()).await;

    assert!(report.is_empty());
    assert_eq!(report.series.title, title("Gone"));
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings.iter().all(PageviewsError::is_recoverable));
}

#[tokio::test]
async fn connector_without_capability_is_unsupported() {
    let mock = MockConnector::builder().without_daily_views().build();
    let pv = Pageviews::builder().with_connector(mock.clone()).build().unwrap();

    let report = pv.pageviews(&title("A"), &january()).await;

    assert!(report.is_empty());
    assert_eq!(
        report.warnings,
        vec![PageviewsError::unsupported("daily-views")]
    );
    assert_eq!(mock.calls(), 0);
}
