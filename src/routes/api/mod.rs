pub mod posts_router;

pub use posts_router::post_routes;

/// Prefix every post resource, and every `Location` header, is built on.
pub const POSTS_PATH: &str = "/api/posts";
