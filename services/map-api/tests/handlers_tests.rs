//! HTTP-level tests for the map service router.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use common::recording_state;
use map_api::create_router;
use map_api::state::AppState;

const BODY_LIMIT: usize = 1024 * 1024;

fn form_body(taxon: &str, maptype: &str, coordinates: &str) -> String {
    // Minimal urlencoding for the characters the tests use.
    let encode = |s: &str| {
        s.replace('%', "%25")
            .replace(' ', "+")
            .replace(',', "%2C")
            .replace('\n', "%0A")
    };
    format!(
        "taxon={}&maptype={}&coordinates={}",
        encode(taxon),
        encode(maptype),
        encode(coordinates)
    )
}

fn post_map(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/map")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_data_entry_page() {
    let app = create_router(Arc::new(AppState::new(false)));
    let (status, headers, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(body.contains("<form action=\"/map\" method=\"post\">"));
}

#[tokio::test]
async fn test_stylesheet() {
    let app = create_router(Arc::new(AppState::new(false)));
    let (status, headers, body) = send(&app, get("/style.css")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/css");
    assert!(body.contains("body {"));
}

#[tokio::test]
async fn test_get_map_redirects_home() {
    let app = create_router(Arc::new(AppState::new(false)));
    let (status, headers, _) = send(&app, get("/map")).await;

    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(headers[header::LOCATION], "/");
}

#[tokio::test]
async fn test_health() {
    let app = create_router(Arc::new(AppState::new(false)));
    let (status, _, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ============================================================================
// Display then download
// ============================================================================

#[tokio::test]
async fn test_download_before_any_map() {
    let app = create_router(Arc::new(AppState::new(false)));
    let (status, headers, body) = send(&app, get("/mapfile")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "There is no map in memory");
    assert!(headers.get(header::CONTENT_DISPOSITION).is_none());
}

#[tokio::test]
async fn test_display_then_download() {
    let state = Arc::new(AppState::new(false));
    let app = create_router(state.clone());

    let (status, _, page) = send(
        &app,
        post_map(form_body(
            "Eucalyptus gunnii",
            "plain",
            "-42.12344,147.43321\n-41.34221,145.43442",
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<title>Preview map for Eucalyptus gunnii</title>"));
    assert!(page.contains("<svg"));
    assert!(!page.contains("<?xml"));
    assert!(page.contains("href=\"/mapfile\""));

    let (status, headers, svg) = send(&app, get("/mapfile")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=eucalyptus-gunnii.plain.svg"
    );
    assert!(svg.starts_with("<?xml"));
    assert_eq!(svg, state.cache.load().await.unwrap().svg_body);
}

#[tokio::test]
async fn test_download_after_taxon_with_newline() {
    let state = Arc::new(AppState::new(false));
    let app = create_router(state.clone());

    let (status, _, _) = send(
        &app,
        post_map("taxon=Acacia%0Adealbata&maptype=grid&coordinates=-42.1%2C147.4".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.cache.load().await.unwrap().taxon_name, "Acacia\ndealbata");

    let (status, headers, svg) = send(&app, get("/mapfile")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=acacia-dealbata.grid.svg"
    );
    assert!(svg.starts_with("<?xml"));
}

#[tokio::test]
async fn test_download_repeats_until_next_store() {
    let app = create_router(Arc::new(AppState::new(false)));
    send(&app, post_map(form_body("First", "web", "-42.1,147.4"))).await;

    for _ in 0..2 {
        let (status, headers, _) = send(&app, get("/mapfile")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=first.web.svg"
        );
    }

    send(&app, post_map(form_body("Second", "plain", "-42.1,147.4"))).await;
    let (_, headers, _) = send(&app, get("/mapfile")).await;
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=second.plain.svg"
    );
}

#[tokio::test]
async fn test_invalid_coordinates_page() {
    let (state, log) = recording_state();
    let app = create_router(state.clone());

    let (status, _, page) = send(&app, post_map(form_body("t", "grid", "not,coords"))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(page.contains("I can't interpret these coordinates"));
    assert!(log.calls().is_empty());

    let (status, _, _) = send(&app, get("/mapfile")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_style_page_has_no_download_link() {
    let (state, _) = recording_state();
    let app = create_router(state);

    let (status, _, page) =
        send(&app, post_map(form_body("t", "satellite", "-42.1,147.4"))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(page.contains("No map drawn for map type 'satellite'"));
    assert!(!page.contains("href=\"/mapfile\""));
}

#[tokio::test]
async fn test_taxon_is_escaped_in_page() {
    let (state, _) = recording_state();
    let app = create_router(state);

    let (_, _, page) = send(
        &app,
        post_map(form_body("<b>bold</b>", "web", "-42.1,147.4")),
    )
    .await;
    assert!(page.contains("Preview map for &lt;b&gt;bold&lt;/b&gt;"));
    assert!(!page.contains("<b>bold</b>"));
}

// ============================================================================
// Status API
// ============================================================================

#[tokio::test]
async fn test_status_reports_current_map() {
    let (state, _) = recording_state();
    let app = create_router(state);

    let (_, _, body) = send(&app, get("/api/status")).await;
    let status: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(status["map_available"], false);
    assert!(status["current_map"].is_null());

    send(&app, post_map(form_body("Acacia dealbata", "grid", "-42.1,147.4"))).await;

    let (_, _, body) = send(&app, get("/api/status")).await;
    let status: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(status["map_available"], true);
    assert_eq!(status["current_map"]["file_name"], "acacia-dealbata.grid.svg");
    assert_eq!(status["current_map"]["map_style"], "grid");
    assert_eq!(status["cache"]["stores"], 1);
    assert_eq!(status["maps_rendered"], 1);
}

// ============================================================================
// Classification strategy
// ============================================================================

#[tokio::test]
async fn test_strict_flag_rejects_mixed_list() {
    let coordinates = "-42.1,147.4\nnot,coords";

    let lenient = Arc::new(AppState::new(false));
    let app = create_router(lenient.clone());
    let (status, _, page) = send(&app, post_map(form_body("t", "plain", coordinates))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("href=\"/mapfile\""));
    assert!(lenient.cache.load().await.is_some());

    let strict = Arc::new(AppState::new(true));
    let app = create_router(strict.clone());
    let (status, _, page) = send(&app, post_map(form_body("t", "plain", coordinates))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(page.contains("I can't interpret these coordinates"));
    assert!(strict.cache.load().await.is_none());
}
