// OpenAPI document and Swagger UI for the posts API

use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        CommentResponse,
        CreateCommentRequest,
        CreatePostRequest,
        PostDetailResponse,
        PostSummaryResponse,
        ValidationProblem,
    },
    handlers::post_handlers,
    AppState,
};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "v1",
        description = "Posts and their comments"
    ),
    paths(
        post_handlers::list_posts,
        post_handlers::get_post_detail,
        post_handlers::create_post,
        post_handlers::create_comment,
    ),
    components(
        schemas(
            CreatePostRequest,
            CreateCommentRequest,
            PostSummaryResponse,
            PostDetailResponse,
            CommentResponse,
            ValidationProblem,
        )
    ),
    tags((name = "Posts", description = "Blog posts and comments"))
)]
pub struct ApiDoc;

/// Swagger UI plus the raw document it renders. Mounted outside production only.
pub fn docs_routes() -> Router<Arc<AppState>> {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()).into()
}
