use std::sync::Arc;

use axum::{
    extract::{ Path, State },
    http::{ header, StatusCode },
    response::IntoResponse,
    Json,
};
use tracing::{ debug, info };
use uuid::Uuid;

use crate::{
    dto::{
        CommentResponse,
        ValidationProblem,
        CreateCommentRequest,
        CreatePostRequest,
        PostDetailResponse,
        PostSummaryResponse,
    },
    errors::HttpError,
    handlers::extractors::ValidatedJson,
    routes::api::POSTS_PATH,
    AppState,
};

/// Route ids that are not UUIDs can never match a post.
fn parse_post_id(raw_id: &str) -> Result<Uuid, HttpError> {
    Uuid::parse_str(raw_id).map_err(|_| {
        debug!(post_id = raw_id, "rejecting malformed post id");
        HttpError::post_not_found(raw_id)
    })
}

// GET ALL POSTS
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    responses((status = 200, description = "Every post with its comment count", body = [PostSummaryResponse]))
)]
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Result<
    Json<Vec<PostSummaryResponse>>,
    HttpError
> {
    let summaries = state.repository.list_post_summaries().await?;

    Ok(Json(summaries.into_iter().map(PostSummaryResponse::from).collect()))
}

// GET POST BY ID
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with its comments", body = PostDetailResponse),
        (status = 404, description = "No post with this id", body = String)
    )
)]
pub async fn get_post_detail(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>
) -> Result<Json<PostDetailResponse>, HttpError> {
    let post_id = parse_post_id(&raw_id)?;

    match state.repository.get_post_with_comments(post_id).await? {
        Some(detail) => Ok(Json(PostDetailResponse::from(detail))),
        None => {
            debug!(%post_id, "post not found");
            Err(HttpError::post_not_found(post_id))
        }
    }
}

// CREATE NEW POST
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostSummaryResponse,
            headers(("Location" = String, description = "URL of the new post"))),
        (status = 422, description = "Invalid title or content", body = ValidationProblem)
    )
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<CreatePostRequest>
) -> Result<impl IntoResponse, HttpError> {
    let post = state.repository.create_post(body.title, body.content).await?;
    info!(post_id = %post.id, "created post");

    let location = format!("{}/{}", POSTS_PATH, post.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PostSummaryResponse::newly_created(post)),
    ))
}

// CREATE COMMENT ON POST
#[utoipa::path(
    post,
    path = "/api/posts/{id}/comments",
    tag = "Posts",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse,
            headers(("Location" = String, description = "URL of the new comment"))),
        (status = 404, description = "No post with this id", body = String),
        (status = 422, description = "Invalid comment text", body = ValidationProblem)
    )
)]
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    ValidatedJson(body): ValidatedJson<CreateCommentRequest>
) -> Result<impl IntoResponse, HttpError> {
    let post_id = parse_post_id(&raw_id)?;

    // existence check before the write, so no orphan is ever inserted
    if state.repository.get_post(post_id).await?.is_none() {
        debug!(%post_id, "comment target not found");
        return Err(HttpError::post_not_found(post_id));
    }

    let comment = state.repository
        .create_comment(post_id, body.text).await
        .map_err(HttpError::for_post(post_id))?;
    info!(%post_id, comment_id = %comment.id, "created comment");

    let location = format!("{}/{}/comments/{}", POSTS_PATH, post_id, comment.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(CommentResponse::from(comment))))
}
