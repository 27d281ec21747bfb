use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    models::{ Comment, NewComment, NewPost, Post, PostSummary, PostWithComments },
    repositories::{ PostRepository, RepositoryError, RepositoryResult },
};

#[derive(Default)]
struct Store {
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Store {
    fn find_post(&self, id: Uuid) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    fn comments_for(&self, post_id: Uuid) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(move |comment| comment.post_id == post_id)
    }
}

/// Gateway kept entirely in process memory, with the same contract as the
/// Postgres one: a comment cannot reference a missing post, and deleting a
/// post removes its comments. Listing returns posts in insertion order.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn comment_row_count(&self) -> usize {
        self.store.read().await.comments.len()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_post_summaries(&self) -> RepositoryResult<Vec<PostSummary>> {
        let store = self.store.read().await;

        Ok(
            store.posts
                .iter()
                .map(|post| PostSummary {
                    id: post.id,
                    title: post.title.clone(),
                    comment_count: store.comments_for(post.id).count() as i64,
                })
                .collect()
        )
    }

    async fn get_post_with_comments(&self, id: Uuid) -> RepositoryResult<Option<PostWithComments>> {
        let store = self.store.read().await;

        Ok(
            store.find_post(id).map(|post| PostWithComments {
                post: post.clone(),
                comments: store.comments_for(id).cloned().collect(),
            })
        )
    }

    async fn create_post(&self, title: String, content: String) -> RepositoryResult<Post> {
        let new_post = NewPost::new(title, content);
        let post = Post {
            id: new_post.id,
            title: new_post.title,
            content: new_post.content,
        };

        self.store.write().await.posts.push(post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: Uuid) -> RepositoryResult<Option<Post>> {
        Ok(self.store.read().await.find_post(id).cloned())
    }

    async fn create_comment(&self, post_id: Uuid, text: String) -> RepositoryResult<Comment> {
        let mut store = self.store.write().await;
        if store.find_post(post_id).is_none() {
            return Err(RepositoryError::NotFound);
        }

        let new_comment = NewComment::new(post_id, text);
        let comment = Comment {
            id: new_comment.id,
            text: new_comment.text,
            post_id: new_comment.post_id,
        };

        store.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete_post(&self, id: Uuid) -> RepositoryResult<bool> {
        let mut store = self.store.write().await;
        let before = store.posts.len();

        store.comments.retain(|comment| comment.post_id != id);
        store.posts.retain(|post| post.id != id);

        Ok(store.posts.len() < before)
    }
}
