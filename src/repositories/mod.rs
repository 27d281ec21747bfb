//! Persistence gateway for posts and comments.
//!
//! Handlers only see [`PostRepository`]; the Postgres implementation is used
//! in production and the in-memory one backs handler tests.

pub mod post_repository;
pub mod memory_repository;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{ Comment, Post, PostSummary, PostWithComments };

pub use post_repository::PgPostRepository;
pub use memory_repository::InMemoryPostRepository;

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A referenced row does not exist.
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")] Database(diesel::result::Error),

    #[error("Connection pool error: {0}")] Pool(#[from] diesel::r2d2::PoolError),

    #[error("Background task failed: {0}")] Task(String),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{ DatabaseErrorKind, Error };

        match err {
            Error::NotFound => RepositoryError::NotFound,
            Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                RepositoryError::NotFound
            }
            other => RepositoryError::Database(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post with its derived comment count. Empty when there are no posts.
    async fn list_post_summaries(&self) -> RepositoryResult<Vec<PostSummary>>;

    /// One post and all of its comments, or `None` for an unknown id.
    async fn get_post_with_comments(&self, id: Uuid) -> RepositoryResult<Option<PostWithComments>>;

    async fn create_post(&self, title: String, content: String) -> RepositoryResult<Post>;

    /// Existence check without loading comments.
    async fn get_post(&self, id: Uuid) -> RepositoryResult<Option<Post>>;

    /// The caller confirms the post exists first; a post that vanished in
    /// between surfaces as [`RepositoryError::NotFound`].
    async fn create_comment(&self, post_id: Uuid, text: String) -> RepositoryResult<Comment>;

    /// Removes a post and its comments together. Returns whether a post was removed.
    async fn delete_post(&self, id: Uuid) -> RepositoryResult<bool>;
}
