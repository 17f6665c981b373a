use axum::{
    routing::get,
    Router,
    extract::{Path, Query, State},
    http::Method,
    response::Response,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::error::Result;
use crate::api::models::SearchParams;
use crate::api::response;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(app_state.config.allowed_origin.clone()))
        .allow_methods([Method::GET])
        .allow_headers(Any);

    // The static `search` segment takes priority over the `:category` capture
    Router::new()
        .route("/api/news/search", get(search))
        .route("/api/news/:category", get(get_by_category))
        .layer(cors)
        .with_state(app_state)
}

async fn get_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Response> {
    tracing::info!("Top headlines requested for category: {}", category);
    let reply = state.news.fetch_by_category(&category).await?;
    Ok(response::relay(reply))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response> {
    tracing::info!("Search requested for query: {}", params.q);
    let reply = state.news.fetch_by_search(&params.q).await?;
    Ok(response::relay(reply))
}
