//! The list query descriptor and its validator.
//!
//! Raw query-string parameters arrive as a string map. [`ListQuery::from_params`]
//! turns them into a typed, immutable descriptor:
//!
//! | Key | Type | Default |
//! |-----|------|---------|
//! | `page` | integer >= 1 | 1 |
//! | `limit` | integer in [1, 100] | 20 |
//! | `sort` | field name | `created_at` |
//! | `order` | `asc` / `desc`, case-insensitive | `desc` |
//!
//! Resource-specific filters are parsed by the resource's [`FilterSet`].
//! Blank values count as absent; unknown keys are ignored.
//!
//! The sort field is not checked here. Resources reject fields they cannot
//! sort on with [`ListQuery::ensure_sortable`].

pub mod fields;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest};

pub const DEFAULT_SORT: &str = "created_at";

/// Raw query-string parameters as received from the request.
pub type RawParams = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(AppError::validation(
                "order",
                format!("order must be one of: asc, desc (got `{}`)", s),
            ))
        }
    }
}

/// A string-backed enum that can be used as a query filter.
pub trait EnumField: FromStr {
    /// Accepted wire values, in declaration order.
    const VARIANTS: &'static [&'static str];
}

/// Resource-specific filters carried by a [`ListQuery`].
pub trait FilterSet: Sized + Clone + Debug + Default {
    /// Fields this resource can be sorted by.
    const SORT_FIELDS: &'static [&'static str];

    fn from_params(params: &RawParams) -> Result<Self, AppError>;
}

/// The no-filter set, for collections without resource filters.
impl FilterSet for () {
    const SORT_FIELDS: &'static [&'static str] = &[DEFAULT_SORT];

    fn from_params(_params: &RawParams) -> Result<Self, AppError> {
        Ok(())
    }
}

/// Validated paging, sorting and filtering input for one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F = ()> {
    page: PageRequest,
    sort: String,
    order: SortOrder,
    filters: F,
}

impl<F: FilterSet> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            page: PageRequest::default(),
            sort: DEFAULT_SORT.to_string(),
            order: SortOrder::default(),
            filters: F::default(),
        }
    }
}

impl<F: FilterSet> ListQuery<F> {
    /// Validates and normalizes raw query parameters.
    ///
    /// Pure: the same input always yields the same descriptor or the same
    /// error.
    pub fn from_params(params: &RawParams) -> Result<Self, AppError> {
        let page = fields::integer(params, "page")?.unwrap_or(i64::from(DEFAULT_PAGE));
        let limit = fields::integer(params, "limit")?.unwrap_or(i64::from(DEFAULT_LIMIT));
        let page = PageRequest::new(page, limit)?;

        let sort = fields::text(params, "sort").unwrap_or_else(|| DEFAULT_SORT.to_string());
        let order = match fields::text(params, "order") {
            Some(raw) => raw.parse()?,
            None => SortOrder::default(),
        };

        let filters = F::from_params(params)?;

        Ok(Self {
            page,
            sort,
            order,
            filters,
        })
    }
}

impl<F> ListQuery<F> {
    pub fn page_request(&self) -> &PageRequest {
        &self.page
    }

    pub fn page(&self) -> u32 {
        self.page.page()
    }

    pub fn limit(&self) -> u32 {
        self.page.limit()
    }

    pub fn sort(&self) -> &str {
        &self.sort
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    /// Rejects sort fields outside `allowed`.
    pub fn ensure_sortable(&self, allowed: &[&str]) -> Result<(), AppError> {
        if allowed.contains(&self.sort.as_str()) {
            return Ok(());
        }
        Err(AppError::validation(
            "sort",
            format!("sort must be one of: {}", allowed.join(", ")),
        ))
    }

    /// Returns a new descriptor with the filters rewritten.
    pub fn map_filters(self, f: impl FnOnce(F) -> F) -> Self {
        Self {
            filters: f(self.filters),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn params(pairs: &[(&str, &str)]) -> RawParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_absent() {
        let query = ListQuery::<()>::from_params(&params(&[])).unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 20);
        assert_eq!(query.sort(), "created_at");
        assert_eq!(query.order(), SortOrder::Desc);
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let query =
            ListQuery::<()>::from_params(&params(&[("page", ""), ("limit", " "), ("order", "")]))
                .unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 20);
        assert_eq!(query.order(), SortOrder::Desc);
    }

    #[test]
    fn test_page_and_limit_parsed() {
        let query = ListQuery::<()>::from_params(&params(&[("page", "2"), ("limit", "10")]))
            .unwrap();
        assert_eq!(query.page(), 2);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.page_request().offset(), 10);
    }

    #[test]
    fn test_limit_above_maximum() {
        let err = ListQuery::<()>::from_params(&params(&[("limit", "500")])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.field.as_deref(), Some("limit"));
        assert_eq!(err.message(), "limit exceeds maximum 100");
    }

    #[test]
    fn test_out_of_range_page_and_limit() {
        for (key, value) in [("page", "0"), ("page", "-3"), ("limit", "0"), ("limit", "101")] {
            let err = ListQuery::<()>::from_params(&params(&[(key, value)])).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "{key}={value}");
            assert_eq!(err.field.as_deref(), Some(key));
        }
    }

    #[test]
    fn test_non_integer_page() {
        let err = ListQuery::<()>::from_params(&params(&[("page", "two")])).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("page"));
        assert_eq!(err.message(), "page must be an integer");

        let err = ListQuery::<()>::from_params(&params(&[("limit", "1.5")])).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("limit"));
    }

    #[test]
    fn test_order_is_case_insensitive() {
        for (raw, expected) in [
            ("asc", SortOrder::Asc),
            ("ASC", SortOrder::Asc),
            ("Asc", SortOrder::Asc),
            ("desc", SortOrder::Desc),
            ("DESC", SortOrder::Desc),
            ("dEsC", SortOrder::Desc),
        ] {
            let query = ListQuery::<()>::from_params(&params(&[("order", raw)])).unwrap();
            assert_eq!(query.order(), expected);
            assert_eq!(query.order().as_str(), raw.to_lowercase());
        }
    }

    #[test]
    fn test_invalid_order() {
        for raw in ["ascending", "up", "1"] {
            let err = ListQuery::<()>::from_params(&params(&[("order", raw)])).unwrap_err();
            assert_eq!(err.field.as_deref(), Some("order"));
        }
    }

    #[test]
    fn test_sort_accepts_any_field() {
        let query = ListQuery::<()>::from_params(&params(&[("sort", "password_hash")])).unwrap();
        assert_eq!(query.sort(), "password_hash");
    }

    #[test]
    fn test_ensure_sortable() {
        let query = ListQuery::<()>::from_params(&params(&[("sort", "title")])).unwrap();
        assert!(query.ensure_sortable(&["created_at", "title"]).is_ok());

        let err = query.ensure_sortable(&["created_at"]).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("sort"));
        assert_eq!(err.message(), "sort must be one of: created_at");
    }

    #[test]
    fn test_validator_is_idempotent() {
        let raw = params(&[("page", "3"), ("limit", "15"), ("sort", "title"), ("order", "ASC")]);
        let first = ListQuery::<()>::from_params(&raw).unwrap();
        let second = ListQuery::<()>::from_params(&raw).unwrap();
        assert_eq!(first, second);

        let bad = params(&[("limit", "500")]);
        let first = ListQuery::<()>::from_params(&bad).unwrap_err();
        let second = ListQuery::<()>::from_params(&bad).unwrap_err();
        assert_eq!(first.field, second.field);
        assert_eq!(first.message(), second.message());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let query = ListQuery::<()>::from_params(&params(&[("utm_source", "mail")])).unwrap();
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn test_sort_order_apply() {
        assert_eq!(SortOrder::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Desc.apply(Ordering::Equal), Ordering::Equal);
    }
}
