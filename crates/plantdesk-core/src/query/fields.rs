//! Typed field parsers for raw query parameters.
//!
//! Each parser returns `Ok(None)` when the key is absent or blank and a
//! validation error naming the key when the value does not parse.

use chrono::NaiveDate;
use uuid::Uuid;

use super::{EnumField, RawParams};
use crate::errors::AppError;

/// Trimmed value, `None` when absent or blank.
pub fn text(params: &RawParams, key: &str) -> Option<String> {
    params
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn integer(params: &RawParams, key: &str) -> Result<Option<i64>, AppError> {
    text(params, key)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| AppError::validation(key, format!("{} must be an integer", key)))
        })
        .transpose()
}

/// Accepts `true`/`false`/`1`/`0`, case-insensitive.
pub fn boolean(params: &RawParams, key: &str) -> Result<Option<bool>, AppError> {
    text(params, key)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(AppError::validation(
                key,
                format!("{} must be a boolean", key),
            )),
        })
        .transpose()
}

pub fn uuid(params: &RawParams, key: &str) -> Result<Option<Uuid>, AppError> {
    text(params, key)
        .map(|raw| {
            Uuid::parse_str(&raw)
                .map_err(|_| AppError::validation(key, format!("{} must be a valid UUID", key)))
        })
        .transpose()
}

/// Calendar date in `YYYY-MM-DD` form.
pub fn date(params: &RawParams, key: &str) -> Result<Option<NaiveDate>, AppError> {
    text(params, key)
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                AppError::validation(key, format!("{} must be a date (YYYY-MM-DD)", key))
            })
        })
        .transpose()
}

pub fn enumeration<T: EnumField>(params: &RawParams, key: &str) -> Result<Option<T>, AppError> {
    text(params, key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| {
                AppError::validation(
                    key,
                    format!("{} must be one of: {}", key, T::VARIANTS.join(", ")),
                )
            })
        })
        .transpose()
}

/// Fails on `upper_key` when both bounds are present and out of order.
pub fn date_range(
    params: &RawParams,
    lower_key: &str,
    upper_key: &str,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>), AppError> {
    let lower = date(params, lower_key)?;
    let upper = date(params, upper_key)?;

    if let (Some(from), Some(to)) = (lower, upper)
        && from > to
    {
        return Err(AppError::validation(
            upper_key,
            format!("{} must not be before {}", upper_key, lower_key),
        ));
    }

    Ok((lower, upper))
}
