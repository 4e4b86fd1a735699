use omnikanji_core::{LookupError, TransportError};

use super::fixtures::*;
use super::mock_transport::MockTransport;
use crate::link_index::{load_link_index, parse_link_index};

const LIST_URL: &str = "http://www.kanjidamage.com/kanji";

#[test]
fn test_indexes_rows_with_links() {
    let index = parse_link_index(KANJIDMG_LISTING, KANJIDMG_BASE_URL).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(
        index.get("一"),
        Some("http://www.kanjidamage.com/kanji/1-one-%E4%B8%80")
    );
    assert_eq!(
        index.get("兄"),
        Some("http://www.kanjidamage.com/kanji/12-older-brother-%E5%85%84")
    );
    assert!(!index.contains("弟"));
    assert!(!index.contains("亡"));
}

#[test]
fn test_unexpected_layout_gives_empty_index() {
    let index = parse_link_index("<html><body><p>maintenance</p></body></html>", KANJIDMG_BASE_URL)
        .unwrap();
    assert!(index.is_empty());
}

#[tokio::test]
async fn test_load_fetches_listing() {
    let transport = MockTransport::new().with_page(LIST_URL, KANJIDMG_LISTING);

    let index = load_link_index(&transport, LIST_URL, KANJIDMG_BASE_URL)
        .await
        .unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(transport.requests(), vec![LIST_URL.to_string()]);
}

#[tokio::test]
async fn test_load_fails_on_transport_error() {
    let transport = MockTransport::new();

    let err = load_link_index(&transport, LIST_URL, KANJIDMG_BASE_URL)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LookupError::Transport(TransportError::Status { status: 404, .. })
    ));
}
