use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

fn fixture_config(tag: &str) -> Config {
    let root = std::env::temp_dir().join(format!("dashboard-routes-{tag}-{}", std::process::id()));
    let site = root.join("site");
    let data = root.join("data");
    std::fs::create_dir_all(&site).unwrap();
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(site.join("index.html"), "<html>shell</html>").unwrap();
    std::fs::write(data.join("kpis.json"), r#"{"financial":[]}"#).unwrap();
    Config { port: 0, site_dir: site, data_dir: data }
}

async fn get_response(config: &Config, uri: &str) -> (StatusCode, String) {
    let response = app(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn health_probe_returns_ok() {
    let config = fixture_config("health");
    let (status, _) = get_response(&config, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn data_documents_are_served_under_data() {
    let config = fixture_config("data");
    let (status, body) = get_response(&config, "/data/kpis.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("financial"));
}

#[tokio::test]
async fn missing_data_document_is_not_found() {
    let config = fixture_config("missing");
    let (status, _) = get_response(&config, "/data/absent.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn root_serves_the_index_shell() {
    let config = fixture_config("root");
    let (status, body) = get_response(&config, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("shell"));
}

#[tokio::test]
async fn deep_links_fall_back_to_the_shell() {
    let config = fixture_config("deep");
    for uri in ["/blue", "/frameworks", "/assignments/finance", "/story"] {
        let (status, body) = get_response(&config, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("shell"));
    }
}
