use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use streamy_core::MediaItem;
use streamy_core::error::ApiError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/media", get(list_media))
        .route("/media/{media_id}", get(get_media))
        .route("/search/{query}", get(search_media))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Any origin, method and header, with credentials. Development posture.
        .layer(CorsLayer::very_permissive())
}

#[derive(Serialize)]
struct WelcomeResponse {
    message: &'static str,
}

async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Streamy API",
    })
}

async fn list_media(State(state): State<AppState>) -> Json<Vec<MediaItem>> {
    Json(state.catalog.list_all().to_vec())
}

async fn get_media(
    State(state): State<AppState>,
    Path(media_id): Path<String>,
) -> Result<Json<MediaItem>, AppError> {
    let item = state.catalog.get_by_id(&media_id).inspect_err(|_| {
        debug!(media_id = %media_id, "media lookup missed");
    })?;
    Ok(Json(item.clone()))
}

async fn search_media(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Json<Vec<MediaItem>> {
    let hits: Vec<MediaItem> = state
        .catalog
        .search(&query)
        .into_iter()
        .cloned()
        .collect();
    debug!(query = %query, hits = hits.len(), "search");
    Json(hits)
}

async fn route_not_found() -> AppError {
    ApiError::NotFound("Not Found".into()).into()
}

async fn method_not_allowed() -> AppError {
    ApiError::MethodNotAllowed.into()
}
