use axum::{
    extract::{
        FromRequestParts, Path,
        path::ErrorKind,
        rejection::PathRejection,
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use plantdesk_core::AppError;

/// Path parameters whose rejection uses the JSON error body.
///
/// A malformed parameter is a validation error naming the parameter.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedPath<T>(pub T);

fn reject(rejection: PathRejection) -> AppError {
    let PathRejection::FailedToDeserializePathParams(err) = rejection else {
        return AppError::internal(anyhow::anyhow!(rejection.body_text()));
    };

    let key = match err.kind() {
        ErrorKind::ParseErrorAtKey { key, .. }
        | ErrorKind::DeserializeError { key, .. }
        | ErrorKind::InvalidUtf8InPathParam { key } => key.clone(),
        _ => "id".to_string(),
    };

    AppError::validation(key.clone(), format!("{} is not a valid identifier", key))
}

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(reject)?;

        Ok(ValidatedPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn show(ValidatedPath(id): ValidatedPath<Uuid>) -> String {
        id.to_string()
    }

    async fn call(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route("/items/{id}", get(show));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_valid_uuid_passes() {
        let id = Uuid::new_v4();
        let (status, _) = call(&format!("/items/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_uuid_is_json_validation_error() {
        let (status, body) = call("/items/not-a-uuid").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "validation");
        assert_eq!(body["status"], 400);
        assert_eq!(body["field"], "id");
    }
}
