use serde::{ Deserialize, Serialize };
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{ Validate, ValidationError };

use crate::{ dto::validation::required, models::Comment };

pub const COMMENT_MAX_LENGTH: u64 = 1000;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[schema(min_length = 1, max_length = 1000, example = "Nice!")]
    #[validate(
        custom = "validate_text_required",
        length(max = 1000, message = "The comment cannot be longer than 1000 characters.")
    )]
    pub text: String,
}

fn validate_text_required(text: &str) -> Result<(), ValidationError> {
    required(text, "The comment text is required.")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    pub text: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
        }
    }
}
