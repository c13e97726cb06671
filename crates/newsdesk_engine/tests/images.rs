use newsdesk_engine::{ImageLoader, ImageSettings, PixelSize};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JPEG_STUB: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

#[tokio::test]
async fn loader_returns_bytes_and_serves_repeats_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(JPEG_STUB.to_vec(), "image/jpeg"))
        .expect(1)
        .mount(&server)
        .await;

    let loader = ImageLoader::new(ImageSettings::default());
    let url = format!("{}/a.jpg", server.uri());
    let size = PixelSize::new(320, 240);

    let first = loader.get(&url, size).await.expect("image bytes");
    assert_eq!(&first[..], JPEG_STUB);

    // Second request for the same key must not hit the server again;
    // the mock's expect(1) enforces it.
    let second = loader.get(&url, size).await.expect("cached bytes");
    assert_eq!(first, second);
}

#[tokio::test]
async fn distinct_sizes_are_cached_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/b.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(JPEG_STUB.to_vec(), "image/jpeg"))
        .expect(2)
        .mount(&server)
        .await;

    let loader = ImageLoader::new(ImageSettings::default());
    let url = format!("{}/b.jpg", server.uri());

    assert!(loader.get(&url, PixelSize::new(140, 90)).await.is_some());
    assert!(loader.get(&url, PixelSize::new(640, 360)).await.is_some());
}

#[tokio::test]
async fn http_failure_resolves_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let loader = ImageLoader::new(ImageSettings::default());
    let url = format!("{}/missing.jpg", server.uri());
    assert_eq!(loader.get(&url, PixelSize::new(60, 60)).await, None);
}

#[tokio::test]
async fn invalid_url_resolves_to_none() {
    let loader = ImageLoader::new(ImageSettings::default());
    assert_eq!(loader.get("not a url", PixelSize::new(60, 60)).await, None);
}

#[tokio::test]
async fn oversize_body_resolves_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/huge.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0u8; 64], "image/jpeg"))
        .mount(&server)
        .await;

    let settings = ImageSettings {
        max_bytes: 16,
        ..ImageSettings::default()
    };
    let loader = ImageLoader::new(settings);
    let url = format!("{}/huge.jpg", server.uri());
    assert_eq!(loader.get(&url, PixelSize::new(60, 60)).await, None);
}

#[tokio::test]
async fn non_image_content_type_resolves_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let loader = ImageLoader::new(ImageSettings::default());
    let url = format!("{}/page", server.uri());
    assert_eq!(loader.get(&url, PixelSize::new(60, 60)).await, None);
}

#[tokio::test]
async fn failures_are_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky.jpg"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let loader = ImageLoader::new(ImageSettings::default());
    let url = format!("{}/flaky.jpg", server.uri());
    let size = PixelSize::new(320, 240);

    assert_eq!(loader.get(&url, size).await, None);
    // A retry reaches the server again instead of replaying the failure.
    assert_eq!(loader.get(&url, size).await, None);
}
