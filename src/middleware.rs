use axum::http::{Method, header::CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsMode;

pub fn cors_layer(mode: CorsMode) -> CorsLayer {
    tracing::info!("CORS mode: {:?}", mode);

    match mode {
        CorsMode::Restricted => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]),
        CorsMode::Open => CorsLayer::permissive(),
    }
}
