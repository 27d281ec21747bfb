use axum::http::{ header, HeaderValue, Method };
use tower_http::cors::{ AllowOrigin, CorsLayer };
use tracing::warn;

use crate::config::ServerConfig;

const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

pub fn create_cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::LOCATION]);

    if server.is_production() {
        match server.allowed_origin.parse::<HeaderValue>() {
            Ok(origin) => layer.allow_origin(origin),
            Err(_) => {
                warn!(origin = %server.allowed_origin, "ALLOWED_ORIGIN is not a valid header value; cross-origin requests are disabled");
                layer
            }
        }
    } else {
        layer.allow_origin(AllowOrigin::any())
    }
}
