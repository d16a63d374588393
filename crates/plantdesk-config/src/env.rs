use std::env;
use std::str::FromStr;

/// Reads and parses an environment variable, falling back on absence or
/// parse failure.
pub(crate) fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn string_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Anything except `false`/`0` counts as enabled.
pub(crate) fn flag(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| parse_flag(&v))
        .unwrap_or(default)
}

pub(crate) fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    !(raw.eq_ignore_ascii_case("false") || raw == "0")
}
