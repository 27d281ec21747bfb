pub mod post_dtos;
pub mod comment_dtos;
pub mod validation;

pub use post_dtos::{ CreatePostRequest, PostSummaryResponse, PostDetailResponse };
pub use comment_dtos::{ CreateCommentRequest, CommentResponse };
pub use validation::{ FieldError, ValidationProblem, validation_problems };
