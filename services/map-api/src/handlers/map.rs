//! Data entry and map display pages.

use axum::{
    extract::{Extension, Form},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use map_common::MapError;

use crate::pages;
use crate::pipeline::{generate_map, MapRequest};
use crate::state::AppState;

const STYLESHEET: &str = include_str!("../../assets/style.css");

/// GET / - Coordinate entry form
pub async fn data_entry_handler() -> Html<String> {
    Html(pages::data_entry_page())
}

/// POST /map - Draw the submitted coordinates and show the map inline
pub async fn map_display_handler(
    Extension(state): Extension<Arc<AppState>>,
    Form(request): Form<MapRequest>,
) -> Response {
    match generate_map(&state, &request).await {
        Ok(generated) => {
            let page = Html(pages::map_page(&generated, &request.maptype));
            if generated.style.is_some() {
                page.into_response()
            } else {
                let e = MapError::UnknownStyle(request.maptype.clone());
                (error_status(&e), page).into_response()
            }
        }
        Err(e) => {
            let title = format!("Map could not be drawn for {}", request.taxon);
            let page = Html(pages::message_page(&title, &e.user_message()));
            (error_status(&e), page).into_response()
        }
    }
}

/// HTTP status for a map error.
pub(crate) fn error_status(e: &MapError) -> StatusCode {
    StatusCode::from_u16(e.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Any other method on /map - back to the entry form
pub async fn map_redirect_handler() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/")])
}

/// GET /style.css
pub async fn style_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLESHEET)
}
