use axum::{ extract::{ FromRequest, Request, rejection::JsonRejection }, Json };
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{ dto::{ validation_problems, FieldError }, errors::HttpError };

/// JSON body that has already passed its `validator` rules.
///
/// Malformed JSON and rule violations reject with a 422 validation problem,
/// so handlers never see invalid input. A body that cannot be read at all
/// (for example one over the size limit) keeps its own status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
    where T: DeserializeOwned + Validate, S: Send + Sync
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>
            ::from_request(req, state).await
            .map_err(|rejection: JsonRejection| match rejection {
                // an oversized or unreadable stream is not a field problem
                JsonRejection::BytesRejection(_) => {
                    HttpError::new(rejection.body_text(), rejection.status())
                }
                _ => HttpError::validation_error(vec![FieldError::new("body", rejection.body_text())]),
            })?;

        value
            .validate()
            .map_err(|errors| HttpError::validation_error(validation_problems(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
