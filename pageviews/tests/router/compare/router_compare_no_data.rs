use chrono::NaiveDate;
use pageviews::{DateRange, Pageviews, PageviewsError};
use pageviews_mock::MockConnector as FixtureConnector;

use crate::helpers::{JAVA, MockConnector, PYTHON, jan, january, series, wiki_url};

#[tokio::test]
async fn upstream_failure_surfaces_as_no_data_with_warning() {
    let mock = MockConnector::builder()
        .returns_series(series("A", &[(1, 10)]))
        .build();
    let pv = Pageviews::builder().with_connector(mock.clone()).build().unwrap();

    let err = pv
        .compare(&wiki_url("A"), &wiki_url("Missing"), &january())
        .await
        .unwrap_err();

    match err {
        PageviewsError::NoData { titles, warnings } => {
            assert_eq!(titles, vec!["Missing"]);
            assert_eq!(warnings, vec![PageviewsError::upstream("Missing", 404)]);
        }
        other => panic!("unexpected: {other:?}"),
    }
    // Both pages are fetched even though B fails.
    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn genuinely_empty_series_is_no_data_without_warnings() {
    let mock = MockConnector::builder()
        .returns_series(series("A", &[]))
        .returns_series(series("B", &[(1, 1)]))
        .build();
    let pv = Pageviews::builder().with_connector(mock).build().unwrap();

    let err = pv
        .compare(&wiki_url("A"), &wiki_url("B"), &january())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PageviewsError::NoData {
            titles: vec!["A".into()],
            warnings: vec![],
        }
    );
}

#[tokio::test]
async fn malformed_response_is_reported_not_raised() {
    let mock = MockConnector::builder()
        .with_views_fn(|t, _| {
            if t.as_str() == "A" {
                Err(PageviewsError::malformed("A", "missing field `views`"))
            } else {
                Ok(series(t.as_str(), &[(1, 1)]))
            }
        })
        .build();
    let pv = Pageviews::builder().with_connector(mock).build().unwrap();

    let err = pv
        .compare(&wiki_url("A"), &wiki_url("B"), &january())
        .await
        .unwrap_err();

    let flat = err.flatten();
    assert_eq!(flat.len(), 1);
    assert!(matches!(flat[0], PageviewsError::MalformedResponse { .. }));
}

#[tokio::test]
async fn inverted_range_is_passed_through_and_yields_no_data() {
    let mock = MockConnector::builder()
        .with_views_fn(|t, r| {
            assert!(r.is_inverted());
            Ok(series(t.as_str(), &[]))
        })
        .build();
    let pv = Pageviews::builder().with_connector(mock.clone()).build().unwrap();

    let inverted = DateRange::new(jan(31), jan(1));
    let err = pv
        .compare(&wiki_url("A"), &wiki_url("B"), &inverted)
        .await
        .unwrap_err();

    assert!(matches!(err, PageviewsError::NoData { ref titles, .. } if titles.len() == 2));
    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn fixture_range_outside_data_is_no_data() {
    let pv = Pageviews::builder()
        .with_connector(std::sync::Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 6, 30).unwrap(),
    );

    let err = pv
        .compare(&wiki_url(PYTHON), &wiki_url(JAVA), &range)
        .await
        .unwrap_err();
    assert!(matches!(err, PageviewsError::NoData { .. }));
    assert!(err.to_string().contains(PYTHON));
}
