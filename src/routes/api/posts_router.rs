use std::sync::Arc;
use axum::{ routing::{ get, post }, Router };
use crate::{ AppState, handlers::post_handlers::* };

// POST ROUTER
pub fn post_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", get(get_post_detail))
        .route("/api/posts/{id}/comments", post(create_comment))
}
