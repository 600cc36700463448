pub mod products;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::docs::{openapi_json, swagger_ui};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
}

/// Full application: product routes plus root, health, the OpenAPI document
/// and its Swagger UI page, wrapped in allow-all CORS and request tracing.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router()
        .route("/", get(|| async { "Hello from Online Retail API!" }))
        .route("/health", get(health_check))
        .route("/api-docs", get(swagger_ui))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
