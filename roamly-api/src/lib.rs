use axum::{
    handler::HandlerWithoutStateExt,
    http::{Method, StatusCode},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod blog;
pub mod error;
pub mod forms;
pub mod heartbeat;
pub mod state;
pub mod submissions;
pub mod tools;


pub use state::AppState;

/// Legacy paths kept alive after the site restructure.
const REDIRECTS: &[(&str, &str)] = &[
    ("/submit", "/submit-tool.html"),
    ("/advertise-with-us", "/advertise.html"),
    ("/newsletter", "/#newsletter"),
];

pub fn app(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let mut router = Router::new()
        .route("/api/tools", get(tools::get_tools))
        .route("/api/categories", get(tools::get_categories))
        .route("/api/stats", get(tools::get_stats))
        .route("/api/newsletter", post(forms::subscribe))
        .route("/api/contact", post(forms::contact))
        .route("/api/submit-tool", post(submissions::submit_tool))
        .route("/api/advertise", post(forms::advertise))
        .route("/blog", get(blog::blog_index))
        .route("/blog/{slug}", get(blog::blog_post));

    for &(path, target) in REDIRECTS {
        router = router.route(path, get(move || async move { Redirect::permanent(target) }));
    }

    // Anything unrouted falls through to static assets, then to a JSON 404.
    let assets = ServeDir::new(static_dir).not_found_service(not_found.into_service());

    router
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "Not found" })),
    )
}
