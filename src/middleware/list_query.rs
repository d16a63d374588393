use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use plantdesk_core::{AppError, FilterSet, ListQuery, RawParams};

/// Extractor producing a validated [`ListQuery`] for filter set `F`.
///
/// Runs the shared validator, then rejects sort fields outside
/// `F::SORT_FIELDS`.
#[derive(Debug, Clone)]
pub struct ListQueryParams<F>(pub ListQuery<F>);

impl<F, S> FromRequestParts<S> for ListQueryParams<F>
where
    F: FilterSet + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RawParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::validation("query", format!("Invalid query string: {}", rejection))
            })?;

        let query = ListQuery::<F>::from_params(&params)?;
        query.ensure_sortable(F::SORT_FIELDS)?;

        Ok(ListQueryParams(query))
    }
}
