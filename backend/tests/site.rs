use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use backend::{app, SiteConfig};
use http_body_util::BodyExt;
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><html lang=\"he\" dir=\"rtl\"><body></body></html>";

fn site_config() -> SiteConfig {
    let dir: PathBuf = std::env::temp_dir().join(format!("site-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), INDEX).unwrap();
    std::fs::write(dir.join("manifest.json"), "{\"start_url\":\"/\"}").unwrap();
    std::fs::create_dir_all(dir.join("images")).unwrap();
    std::fs::write(dir.join("images/logo.svg"), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
    SiteConfig {
        port: 0,
        static_dir: dir,
    }
}

async fn get(config: &SiteConfig, uri: &str) -> (StatusCode, HeaderMap, String) {
    let response = app(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn health_check_responds_ok() {
    let config = site_config();
    let (status, headers, body) = get(&config, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
}

#[tokio::test]
async fn root_serves_the_landing_page() {
    let config = site_config();
    let (status, headers, body) = get(&config, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
    assert_eq!(
        headers[header::REFERRER_POLICY],
        "strict-origin-when-cross-origin"
    );
}

#[tokio::test]
async fn static_files_are_served_with_their_type() {
    let config = site_config();
    let (status, headers, body) = get(&config, "/manifest.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert!(body.contains("start_url"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_landing_page() {
    let config = site_config();
    let (status, _, body) = get(&config, "/contact-form").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn copied_images_are_served() {
    let config = site_config();
    let (status, headers, body) = get(&config, "/images/logo.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
    assert!(body.starts_with("<svg"));
}
