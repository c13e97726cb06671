use newsdesk_engine::decode_headlines;
use pretty_assertions::assert_eq;

#[test]
fn titleless_entries_are_skipped() {
    let body = br#"{
        "status": "ok",
        "articles": [
            { "source": { "name": "Wire" }, "title": "Kept", "url": "https://example.com/kept" },
            { "source": { "name": "Wire" }, "title": "   ", "url": "https://example.com/blank" },
            { "source": { "name": "Wire" }, "url": "https://example.com/absent" }
        ]
    }"#;

    let records = decode_headlines(body).expect("decode");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Kept");
}

#[test]
fn identifiers_are_stable_and_distinct() {
    let body = br#"{
        "status": "ok",
        "articles": [
            { "title": "One", "url": "https://example.com/one" },
            { "title": "Two", "url": "https://example.com/two" }
        ]
    }"#;

    let first = decode_headlines(body).expect("decode");
    let second = decode_headlines(body).expect("decode");

    assert_eq!(first[0].id, second[0].id);
    assert_ne!(first[0].id, first[1].id);
    assert_eq!(first[0].id.len(), 16);
    assert!(first[0].id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn articles_without_url_still_get_identifiers() {
    let body = br#"{
        "status": "ok",
        "articles": [ { "title": "No link here" } ]
    }"#;

    let records = decode_headlines(body).expect("decode");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, None);
    assert_eq!(records[0].source_logo_url, None);
    assert!(!records[0].id.is_empty());
}

#[test]
fn source_logo_is_derived_from_article_host() {
    let body = br#"{
        "status": "ok",
        "articles": [
            { "title": "Hosted", "url": "https://www.example.org/path/to/story" }
        ]
    }"#;

    let records = decode_headlines(body).expect("decode");
    assert_eq!(
        records[0].source_logo_url.as_deref(),
        Some("https://logo.clearbit.com/www.example.org")
    );
}

#[test]
fn missing_articles_field_decodes_to_empty() {
    let records = decode_headlines(br#"{ "status": "ok" }"#).expect("decode");
    assert!(records.is_empty());
}
