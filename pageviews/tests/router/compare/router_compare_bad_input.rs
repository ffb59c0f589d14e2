use pageviews::{Pageviews, PageviewsError};

use crate::helpers::{MockConnector, PYTHON, january, series, wiki_url};

#[tokio::test]
async fn unparseable_url_fails_before_any_request() {
    let mock = MockConnector::builder()
        .returns_series(series(PYTHON, &[(1, 10)]))
        .build();
    let pv = Pageviews::builder().with_connector(mock.clone()).build().unwrap();

    let err = pv
        .compare(&wiki_url(PYTHON), "https://en.wikipedia.org/w/index.php", &january())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PageviewsError::bad_input(["https://en.wikipedia.org/w/index.php"])
    );
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn both_bad_urls_are_named() {
    let mock = MockConnector::builder().build();
    let pv = Pageviews::builder().with_connector(mock.clone()).build().unwrap();

    let err = pv.compare("nonsense", "", &january()).await.unwrap_err();

    match err {
        PageviewsError::BadInput { urls } => assert_eq!(urls, vec!["nonsense", ""]),
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn host_allowlist_rejects_foreign_hosts() {
    let mock = MockConnector::builder().build();
    let pv = Pageviews::builder()
        .with_connector(mock.clone())
        .allowed_hosts(["en.wikipedia.org"])
        .build()
        .unwrap();

    let err = pv
        .compare(
            &wiki_url(PYTHON),
            "https://example.org/wiki/Python_(programming_language)",
            &january(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, PageviewsError::BadInput { .. }));
    assert_eq!(mock.calls(), 0);
}

#[test]
fn extract_title_follows_configured_prefix() {
    let pv = Pageviews::builder()
        .with_connector(MockConnector::builder().build())
        .article_prefix("/article/")
        .build()
        .unwrap();

    assert_eq!(
        pv.extract_title("https://example.org/article/Foo").unwrap().as_str(),
        "Foo"
    );
    assert!(pv.extract_title(&wiki_url("Foo")).is_none());
}

#[test]
fn empty_prefix_is_rejected_at_build() {
    let err = Pageviews::builder()
        .with_connector(MockConnector::builder().build())
        .article_prefix("")
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, PageviewsError::InvalidArg(_)));
}
