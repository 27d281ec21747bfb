pub mod posts;
pub mod comments;
