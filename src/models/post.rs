use diesel::prelude::*;
use serde::{ Deserialize, Serialize };
use uuid::Uuid;

use crate::{ models::Comment, schema::posts };

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Insertable, Clone)]
#[diesel(table_name = posts)]
pub struct NewPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Ids are generated here, never by the caller.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
        }
    }
}

/// Projection used by the post listing: the comment count is derived from
/// the `comments` rows and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub comment_count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}
