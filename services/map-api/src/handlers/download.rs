//! Map download.

use axum::{
    extract::Extension,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

use map_common::MapError;

use super::map::error_status;
use crate::state::AppState;

/// GET /mapfile - Serve the cached map as an SVG attachment
pub async fn map_file_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let Some(map) = state.cache.load().await else {
        let e = MapError::CacheAbsent;
        warn!(error = %e, "Attempt to access map from memory before a map is generated");
        state.metrics.record_download(false);
        return (error_status(&e), e.user_message()).into_response();
    };

    let file_name = map.file_name();
    info!(file_name = %file_name, svg_bytes = map.svg_body.len(), "Serving map file");
    state.metrics.record_download(true);

    let disposition = HeaderValue::try_from(format!("attachment; filename={}", file_name))
        .unwrap_or_else(|e| {
            warn!(error = %e, file_name = %file_name, "Unusable file name, using fallback");
            HeaderValue::from_static("attachment; filename=map.svg")
        });

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("image/svg+xml")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        map.svg_body.clone(),
    )
        .into_response()
}
