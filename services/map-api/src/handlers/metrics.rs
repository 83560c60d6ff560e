//! Health checks, status and metrics endpoints.

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use map_common::MapStyle;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub service: String,
    pub map_available: bool,
    pub current_map: Option<CurrentMap>,
    pub cache: CacheStatsResponse,
    pub maps_rendered: u64,
    pub invalid_inputs: u64,
    pub uptime_secs: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentMap {
    pub taxon_name: String,
    pub map_style: MapStyle,
    pub file_name: String,
    pub generated_at: DateTime<Utc>,
    pub svg_bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub stores: u64,
    pub hits: u64,
    pub misses: u64,
}

/// GET /health - Basic health check
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /api/status - Cached map and counters
pub async fn status_handler(Extension(state): Extension<Arc<AppState>>) -> Json<StatusResponse> {
    let stats = state.cache.stats();
    let cache = CacheStatsResponse {
        stores: stats.stores(),
        hits: stats.hits(),
        misses: stats.misses(),
    };

    let current_map = state.cache.peek().await.map(|map| CurrentMap {
        taxon_name: map.taxon_name.clone(),
        map_style: map.map_style,
        file_name: map.file_name(),
        generated_at: map.generated_at,
        svg_bytes: map.svg_body.len(),
    });

    Json(StatusResponse {
        service: "map-api".to_string(),
        map_available: current_map.is_some(),
        current_map,
        cache,
        maps_rendered: state.metrics.maps_rendered.load(Ordering::Relaxed),
        invalid_inputs: state.metrics.invalid_inputs.load(Ordering::Relaxed),
        uptime_secs: state.metrics.uptime_secs(),
    })
}

/// GET /metrics - Prometheus metrics endpoint
pub async fn metrics_handler(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}
