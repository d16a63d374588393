//! Application error taxonomy.
//!
//! Every failure that reaches the HTTP boundary is an [`AppError`]. The
//! [`ErrorKind`] decides the status code family; validation errors may carry
//! the name of the offending field.
//!
//! # Example JSON Response
//!
//! ```json
//! {
//!   "error": "limit exceeds maximum 100",
//!   "kind": "validation",
//!   "status": 400,
//!   "field": "limit"
//! }
//! ```

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// The closed set of failure categories surfaced by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or out-of-range input.
    Validation,
    /// No valid principal could be resolved.
    Authentication,
    /// A valid principal lacks permission.
    Authorization,
    /// The referenced resource does not exist.
    NotFound,
    /// The request collides with existing state.
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        }
    }

    pub fn default_status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Authorization => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub status: StatusCode,
    pub field: Option<String>,
    pub error: Error,
}

/// Body shape of every error response, for API documentation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            status: kind.default_status(),
            field: None,
            error: err.into(),
        }
    }

    /// Validation failure attributed to a single input field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            field: Some(field.into()),
            ..Self::new(ErrorKind::Validation, anyhow!(message))
        }
    }

    /// Request body failed its declared validation rules.
    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, err).with_status(StatusCode::UNPROCESSABLE_ENTITY)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, anyhow!(message.into()))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, anyhow!(message.into()))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Conflict, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Converts `validator` derive output into a 422, naming the first
    /// offending field.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        let err = Self::unprocessable(anyhow!(message));
        match fields.first() {
            Some((field, _)) if *field != "__all__" => err.with_field(field.to_string()),
            _ => err,
        }
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.kind == ErrorKind::Internal {
            tracing::error!(error = ?self.error, "Internal error");
        }

        let mut body = json!({
            "error": self.message(),
            "kind": self.kind,
            "status": self.status.as_u16(),
        });
        if let Some(field) = &self.field {
            body["field"] = json!(field);
        }

        (self.status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_kind_statuses() {
        assert_eq!(ErrorKind::Validation.default_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::Authentication.default_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::Authorization.default_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorKind::NotFound.default_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::Conflict.default_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorKind::Internal.default_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_carries_field() {
        let err = AppError::validation("limit", "limit exceeds maximum 100");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.field.as_deref(), Some("limit"));
        assert_eq!(err.message(), "limit exceeds maximum 100");
    }

    #[test]
    fn test_unprocessable_is_validation_kind() {
        let err = AppError::unprocessable(anyhow!("bad body"));
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let err: AppError = anyhow!("boom").into();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::forbidden("nope").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = AppError::unauthorized("who are you").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "name must be at least 3 characters"))]
        name: String,
    }

    #[test]
    fn test_from_validation_errors_names_field() {
        let sample = Sample {
            name: "ab".to_string(),
        };
        let errors = sample.validate().unwrap_err();
        let err = AppError::from_validation_errors(&errors);

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.field.as_deref(), Some("name"));
        assert_eq!(err.message(), "name must be at least 3 characters");
    }
}
