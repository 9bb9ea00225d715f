mod product;
mod user;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    domain::responses::{HealthResponse, MessageResponse},
    errors::HttpError,
    utils::shutdown_signal,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::product::product_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        root,
        health_check,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
    ),
    tags(
        (name = "General", description = "Service endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "User", description = "User endpoints"),
    )
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/",
    tag = "General",
    responses((status = 200, description = "Welcome message", body = MessageResponse))
)]
pub async fn root() -> impl IntoResponse {
    Json(MessageResponse::new("Welcome to the Product CRUD API"))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "General",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Result<Response, HttpError> {
    let mut buffer = String::new();

    encode(&mut buffer, &state.registry)
        .map_err(|e| HttpError::Internal(format!("Failed to encode metrics: {e}")))?;

    Ok((
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response())
}

fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(allowed_origins.iter().cloned())
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub struct AppRouter;

impl AppRouter {
    /// Complete application: API routes, metrics, Swagger UI and the HTTP
    /// layers. An empty `allowed_origins` lets any origin through CORS.
    pub fn build(app_state: AppState, allowed_origins: &[HeaderValue]) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/", get(root))
            .route("/health", get(health_check))
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(product_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(allowed_origins))
    }

    pub async fn serve(port: u16, app_state: AppState, allowed_origins: &[HeaderValue]) -> Result<()> {
        let app = Self::build(app_state, allowed_origins);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server terminated unexpectedly")?;

        Ok(())
    }
}
