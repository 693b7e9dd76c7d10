use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use roamly_core::tool::{summarize_categories, summarize_stats, ToolQuery, MAX_PAGE_SIZE};

use crate::error::ApiError;
use crate::state::AppState;

/// Client-visible cache window, in seconds. There is no server-side cache.
const CACHE_TTL: u64 = 300;

fn cached_json(body: serde_json::Value) -> impl IntoResponse {
    (
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={}", CACHE_TTL),
        )],
        Json(body),
    )
}

/// GET /api/tools
pub async fn get_tools(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ToolQuery::from_params(&params);
    let tools = state.content.query_tools(&query).await?;

    Ok(cached_json(json!({
        "success": true,
        "count": tools.len(),
        "source": "notion",
        "data": tools,
    })))
}

/// GET /api/categories
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let query = ToolQuery::default().with_limit(MAX_PAGE_SIZE);
    let tools = state.content.query_tools(&query).await?;
    let categories = summarize_categories(&tools);

    Ok(cached_json(json!({
        "success": true,
        "data": categories,
    })))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let query = ToolQuery::default().with_limit(MAX_PAGE_SIZE);
    let tools = state.content.query_tools(&query).await?;
    let stats = summarize_stats(&tools);

    Ok(cached_json(json!({
        "success": true,
        "data": stats,
    })))
}
