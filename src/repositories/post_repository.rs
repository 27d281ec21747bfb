use async_trait::async_trait;
use diesel::PgConnection;
use tokio::task;
use tracing::debug;
use uuid::Uuid;

use crate::{
    config::PgPool,
    database::operations::{ comments, posts },
    models::{ Comment, NewComment, NewPost, Post, PostSummary, PostWithComments },
    repositories::{ PostRepository, RepositoryError, RepositoryResult },
};

/// Diesel-backed gateway over an r2d2 pool of Postgres connections.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs `f` on a pooled connection inside the blocking thread pool.
    ///
    /// The connection is checked out at the start of the closure and returned
    /// to the pool when it drops, on success and on every error path.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
        where
            T: Send + 'static,
            F: FnOnce(&mut PgConnection) -> Result<T, diesel::result::Error> + Send + 'static
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            debug!(operation, "running database operation");
            f(&mut *conn).map_err(RepositoryError::from)
        })
            .await
            .map_err(|e| RepositoryError::Task(format!("{}: {}", operation, e)))?
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn list_post_summaries(&self) -> RepositoryResult<Vec<PostSummary>> {
        self.with_conn("list_post_summaries", posts::list_post_summaries).await
    }

    async fn get_post_with_comments(&self, id: Uuid) -> RepositoryResult<Option<PostWithComments>> {
        self.with_conn("get_post_with_comments", move |conn| {
            posts::get_post_with_comments(conn, id)
        }).await
    }

    async fn create_post(&self, title: String, content: String) -> RepositoryResult<Post> {
        let new_post = NewPost::new(title, content);
        self.with_conn("create_post", move |conn| posts::create_post(conn, &new_post)).await
    }

    async fn get_post(&self, id: Uuid) -> RepositoryResult<Option<Post>> {
        self.with_conn("get_post", move |conn| posts::get_post(conn, id)).await
    }

    async fn create_comment(&self, post_id: Uuid, text: String) -> RepositoryResult<Comment> {
        let new_comment = NewComment::new(post_id, text);
        self.with_conn("create_comment", move |conn| {
            comments::create_comment(conn, &new_comment)
        }).await
    }

    async fn delete_post(&self, id: Uuid) -> RepositoryResult<bool> {
        let removed = self.with_conn("delete_post", move |conn| posts::delete_post(conn, id)).await?;
        Ok(removed > 0)
    }
}
