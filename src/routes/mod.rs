use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{ AppState, middleware::cors::create_cors_layer, openapi::docs_routes };

pub mod api;
pub mod general_router;

use api::post_routes;
use general_router::general_routes;

/// Main application router assembly function
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = create_cors_layer(&state.server);

    let mut router = Router::new().merge(post_routes()).merge(general_routes());

    if !state.server.is_production() {
        router = router.merge(docs_routes());
    }

    router
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
