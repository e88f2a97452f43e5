//! Identifier case helpers
//!
//! Conversions between env-style `UPPER_SNAKE` keys, dotted group paths and
//! the camelCase property names used in generated config.

use anyhow::{Result, bail};
use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_-]+([a-z0-9])").expect("valid separator regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static PREFIX_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid prefix separator regex"));

/// Convert `DATABASE_URL`, `api-client` or `log_level` to camelCase
pub fn to_camel_case(value: &str) -> String {
    let lower = value.to_lowercase();
    SEPARATOR_RUN
        .replace_all(&lower, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Split a dotted group path, e.g. `"app.api client"` -> `["app", "apiClient"]`
///
/// Every segment must be non-empty and contain only ASCII letters, digits,
/// `_`, `-` or inner whitespace.
pub fn parse_group_path(raw: &str) -> Result<Vec<String>> {
    let raw = raw.trim();
    let mut segments = Vec::new();

    for segment in raw.split('.') {
        let segment = segment.trim();
        if segment.is_empty() {
            bail!("empty segment in group path \"{}\"", raw);
        }
        if let Some(bad) = segment
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace()))
        {
            bail!("unexpected character '{}' in group segment \"{}\"", bad, segment);
        }

        let hyphenated = WHITESPACE_RUN.replace_all(segment, "-");
        segments.push(to_camel_case(&hyphenated));
    }

    Ok(segments)
}

/// Strip the env prefix derived from a group segment (`database` -> `DATABASE_`)
///
/// Returns the key unchanged when it does not start with that prefix.
pub fn strip_prefix_if_match<'a>(env_key: &'a str, group_segment: &str) -> &'a str {
    let prefix = format!(
        "{}_",
        PREFIX_SEPARATORS.replace_all(group_segment, "_").to_uppercase()
    );
    env_key.strip_prefix(prefix.as_str()).unwrap_or(env_key)
}
