//! Validated JSON request bodies.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use plantdesk_core::AppError;

/// JSON body extractor that runs the body's `validator` rules.
///
/// Malformed JSON and a missing content type are 400s; bodies that parse
/// but miss fields, carry wrong types or break a rule are 422s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

fn missing_field(message: &str) -> Option<&str> {
    message
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
}

fn reject(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => AppError::validation(
            "body",
            "Missing 'Content-Type: application/json' header",
        ),
        JsonRejection::JsonSyntaxError(_) => {
            AppError::validation("body", "Request body is not valid JSON")
        }
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            match missing_field(&message) {
                Some(field) => AppError::unprocessable(anyhow!("{} is required", field))
                    .with_field(field),
                None => AppError::unprocessable(anyhow!("Invalid field in request body")),
            }
        }
        other => AppError::validation("body", format!("Invalid request body: {}", other.body_text())),
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(reject)?;

        value
            .validate()
            .map_err(|errors| AppError::from_validation_errors(&errors))?;

        Ok(ValidatedJson(value))
    }
}
