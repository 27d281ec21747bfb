use axum::{ http::StatusCode, response::{ IntoResponse, Response }, Json };
use std::fmt;
use serde::Serialize;
use uuid::Uuid;

use crate::{ dto::{ FieldError, ValidationProblem }, repositories::RepositoryError };

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    PostNotFound(String),
    NotFound,
    InternalServerError,
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorMessage::PostNotFound(post_id) => write!(f, "Post with ID {} not found.", post_id),
            ErrorMessage::NotFound => f.write_str("The requested resource could not be found"),
            ErrorMessage::InternalServerError =>
                f.write_str("Server Error. Please try again later."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
    pub field_errors: Vec<FieldError>,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
            field_errors: Vec::new(),
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::NOT_FOUND)
    }

    pub fn post_not_found(post_id: impl fmt::Display) -> Self {
        HttpError::not_found(ErrorMessage::PostNotFound(post_id.to_string()).to_string())
    }

    pub fn validation_error(field_errors: Vec<FieldError>) -> Self {
        HttpError {
            message: crate::dto::validation::VALIDATION_PROBLEM_TITLE.to_string(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
            field_errors,
        }
    }

    /// 404 and 422 carry the shapes clients of the posts API expect: a bare
    /// JSON string and a validation problem. Everything else uses the
    /// status/message envelope.
    pub fn into_http_response(self) -> Response {
        match self.status {
            StatusCode::NOT_FOUND => (self.status, Json(self.message)).into_response(),
            StatusCode::UNPROCESSABLE_ENTITY =>
                (
                    self.status,
                    Json(ValidationProblem::from_field_errors(&self.field_errors)),
                ).into_response(),
            status => {
                let label = if status.is_server_error() { "error" } else { "fail" };
                let response = Json(ErrorResponse {
                    status: label.to_string(),
                    message: self.message,
                });
                (status, response).into_response()
            }
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpError: message: {}, status: {}", self.message, self.status)
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// Infrastructure failures are logged here and reach the caller only as a
/// generic 500.
impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => HttpError::not_found(ErrorMessage::NotFound.to_string()),
            other => {
                tracing::error!(error = %other, "persistence failure");
                HttpError::server_error(ErrorMessage::InternalServerError.to_string())
            }
        }
    }
}

impl HttpError {
    /// Maps a repository failure on an operation scoped to `post_id`, turning
    /// a missing row into the post-specific 404.
    pub fn for_post(post_id: Uuid) -> impl FnOnce(RepositoryError) -> HttpError {
        move |err| match err {
            RepositoryError::NotFound => HttpError::post_not_found(post_id),
            other => HttpError::from(other),
        }
    }
}
