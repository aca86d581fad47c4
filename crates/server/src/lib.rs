pub mod clients;
pub mod config;
pub mod error;
pub mod normalize;
pub mod routes;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::clients::upstream::UpstreamClient;
use crate::config::Config;

/// Build the relay application. Factored out of `main` so tests can mount
/// the exact same router on an ephemeral port.
pub fn app(config: Config) -> Router {
    let upstream = UpstreamClient::new(&config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/chess-move-suggestion",
            post(routes::suggest::suggest_move),
        )
        .layer(Extension(upstream))
        .layer(cors)
}
