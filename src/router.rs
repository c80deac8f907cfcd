use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::auth::AUTH_TOKEN_HEADER;
use crate::modules::auth::init_auth_router;
use crate::modules::customers::init_customers_router;
use crate::modules::genres::init_genres_router;
use crate::modules::movies::init_movies_router;
use crate::modules::rentals::init_rentals_router;
use crate::modules::returns::init_returns_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Login routes, rate limited per peer IP when limiting is enabled.
fn auth_routes(state: &AppState) -> Router<AppState> {
    let router = init_auth_router();
    match state.rate_limit_config.auth_governor_config() {
        Some(governor) => router.layer(GovernorLayer::new(Arc::new(governor))),
        None => router,
    }
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let auth_token = HeaderName::from_static(AUTH_TOKEN_HEADER);

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, auth_token.clone()])
        .expose_headers([auth_token])
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .nest("/genres", init_genres_router())
                .nest("/movies", init_movies_router())
                .nest("/customers", init_customers_router())
                .nest("/rentals", init_rentals_router())
                .nest("/returns", init_returns_router())
                .nest("/users", init_users_router())
                .nest("/auth", auth_routes(&state)),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
