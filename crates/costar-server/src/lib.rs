//! HTTP layer for the costar link finder.
//!
//! The server is a thin axum surface over `costar-core`: two query endpoints
//! plus a health check, with the CPU-bound graph work pushed onto blocking
//! tasks. All graph logic lives in the core crate.

pub mod fetch;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use costar_core::Catalog;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use handlers::{center, health_check, link, ErrorResponse};

/// Shared application state: the loaded catalog.
pub struct AppState {
    /// Immutable catalog, shareable across request tasks.
    pub catalog: Catalog,
}

/// OpenAPI document for the query surface.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::health_check, handlers::link, handlers::center),
    components(schemas(
        handlers::CenterResponse,
        handlers::ErrorResponse,
        handlers::HealthResponse,
        handlers::LinkStepResponse,
    )),
    tags((name = "costar", description = "Six-degrees link queries"))
)]
pub struct ApiDoc;

/// Builds the full application router over `state`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/health", get(health_check))
        .route("/link", get(link))
        .route("/center", get(center))
        .with_state(state)
        .merge(swagger_ui)
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// CORS layer from environment configuration; permissive in dev.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("COSTAR_CORS_ORIGIN") {
        Ok(origins) => {
            use tower_http::cors::AllowOrigin;
            let origin_list: Vec<_> = origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();
            tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origin_list))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
        Err(_) => {
            tracing::warn!(
                "CORS: permissive (dev mode). Set COSTAR_CORS_ORIGIN to restrict origins."
            );
            CorsLayer::permissive()
        }
    }
}
