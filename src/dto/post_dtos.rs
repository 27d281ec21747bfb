use serde::{ Deserialize, Serialize };
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{ Validate, ValidationError };

use crate::{
    dto::{ comment_dtos::CommentResponse, validation::required },
    models::{ Post, PostSummary, PostWithComments },
};

pub const TITLE_MAX_LENGTH: u64 = 200;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[schema(min_length = 1, max_length = 200, example = "Hello")]
    #[validate(
        custom = "validate_title_required",
        length(max = 200, message = "The title cannot be longer than 200 characters.")
    )]
    pub title: String,

    #[serde(default)]
    #[schema(min_length = 1, example = "World")]
    #[validate(custom = "validate_content_required")]
    pub content: String,
}

fn validate_title_required(title: &str) -> Result<(), ValidationError> {
    required(title, "The title is required.")
}

fn validate_content_required(content: &str) -> Result<(), ValidationError> {
    required(content, "The content is required.")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub comment_count: i64,
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(summary: PostSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            comment_count: summary.comment_count,
        }
    }
}

impl PostSummaryResponse {
    /// A post that was just inserted has no comments yet.
    pub fn newly_created(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            comment_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub comments: Vec<CommentResponse>,
}

impl From<PostWithComments> for PostDetailResponse {
    fn from(detail: PostWithComments) -> Self {
        Self {
            id: detail.post.id,
            title: detail.post.title,
            content: detail.post.content,
            comments: detail.comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}
