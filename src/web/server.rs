use axum::http::HeaderValue;
use axum::{routing::get, routing::post, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::refresh as refresh_handlers;
use super::api::satellites as satellite_handlers;
use super::api_doc::ApiDoc;
use super::AppState;
use crate::config::WebConfig;

fn cors_layer(cors_origin: Option<&str>) -> CorsLayer {
    let origin = match cors_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            log::warn!("Ignoring invalid CORS origin: {}", e);
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn router(state: AppState, cors_origin: Option<&str>) -> Router {
    Router::new()
        .route("/api/satellite/{id}", get(satellite_handlers::get_satellite))
        .route(
            "/api/satellite/fetch-and-save/{id}",
            post(satellite_handlers::fetch_and_save),
        )
        .route("/api/satellite/{id}/tle", get(satellite_handlers::get_tle))
        .route(
            "/api/satellite/{id}/position",
            get(satellite_handlers::get_position),
        )
        .route("/api/satellite/{id}/czml", get(satellite_handlers::get_czml))
        .route(
            "/api/satellite/visibility/{a}/{b}",
            get(satellite_handlers::get_visibility),
        )
        .route("/api/refresh", post(refresh_handlers::refresh_all))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: &WebConfig, state: AppState) -> std::io::Result<()> {
    let app = router(state, config.cors_origin.as_deref());

    log::info!("Starting server on {}", config.bind);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    axum::serve(listener, app).await
}
