//! Per-key schema builder chains
//!
//! Infers a value type from the template sample and renders the
//! `schema("KEY").<type>()...` expression for one item.

use regex::Regex;
use std::sync::LazyLock;

use crate::parser::ParsedItem;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid number regex"));

/// Value type inferred from a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Boolean,
    Number,
}

impl ValueType {
    /// Builder method name in the generated chain
    pub fn builder(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
        }
    }
}

/// Result of inferring a sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inferred {
    pub value_type: ValueType,
    pub required: bool,
    /// Already rendered as a source literal
    pub default: Option<String>,
}

/// Infer type, requiredness and default from a raw sample
///
/// Rules apply in order: blank is a required string, `true`/`false`
/// (any case) a boolean, a decimal literal a number, anything else a
/// string defaulting to the sample.
pub fn infer_type(sample: &str) -> Inferred {
    let sample = sample.trim();

    if sample.is_empty() {
        return Inferred {
            value_type: ValueType::String,
            required: true,
            default: None,
        };
    }

    if sample.eq_ignore_ascii_case("true") || sample.eq_ignore_ascii_case("false") {
        return Inferred {
            value_type: ValueType::Boolean,
            required: false,
            default: Some(sample.to_lowercase()),
        };
    }

    if NUMBER.is_match(sample) {
        return Inferred {
            value_type: ValueType::Number,
            required: false,
            default: Some(number_literal(sample)),
        };
    }

    Inferred {
        value_type: ValueType::String,
        required: false,
        default: Some(quote(sample)),
    }
}

/// Normalize a decimal literal: `042` -> `42`, `1.50` -> `1.5`, `-0` -> `0`
///
/// Samples outside the `f64` range are emitted as written.
fn number_literal(sample: &str) -> String {
    match sample.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            let value = if value == 0.0 { 0.0 } else { value };
            value.to_string()
        }
        _ => sample.to_string(),
    }
}

/// Single-quoted string literal with `\` and `'` escaped
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Render the full builder chain for an item
pub fn render_chain(item: &ParsedItem) -> String {
    let mut chain = format!("schema(\"{}\")", item.full_key);

    match item.enum_values.as_deref() {
        Some(values) if !values.is_empty() => {
            let list = values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(", ");
            chain.push_str(&format!(".string().enum([{}])", list));
        }
        _ => {
            let inferred = infer_type(&item.value_sample);
            chain.push_str(&format!(".{}()", inferred.value_type.builder()));
            if inferred.required {
                chain.push_str(".required()");
            } else if let Some(default) = inferred.default {
                chain.push_str(&format!(".default({})", default));
            }
        }
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_blank_is_required_string() {
        let inferred = infer_type("");
        assert_eq!(inferred.value_type, ValueType::String);
        assert!(inferred.required);
        assert_eq!(inferred.default, None);

        assert!(infer_type("   ").required);
    }

    #[test]
    fn test_infer_boolean() {
        assert_eq!(
            infer_type("true"),
            Inferred {
                value_type: ValueType::Boolean,
                required: false,
                default: Some("true".to_string()),
            }
        );
        assert_eq!(infer_type("FALSE").default.as_deref(), Some("false"));
    }

    #[test]
    fn test_infer_number() {
        let inferred = infer_type("42");
        assert_eq!(inferred.value_type, ValueType::Number);
        assert_eq!(inferred.default.as_deref(), Some("42"));

        assert_eq!(infer_type("-3.25").default.as_deref(), Some("-3.25"));
        assert_eq!(infer_type("042").default.as_deref(), Some("42"));
        assert_eq!(infer_type("1.50").default.as_deref(), Some("1.5"));
        assert_eq!(infer_type("-0").default.as_deref(), Some("0"));
    }

    #[test]
    fn test_infer_number_beyond_f64_range() {
        let huge = format!("1{}", "0".repeat(400));
        let inferred = infer_type(&huge);
        assert_eq!(inferred.value_type, ValueType::Number);
        assert_eq!(inferred.default.as_deref(), Some(huge.as_str()));

        let negative = format!("-{}", huge);
        assert_eq!(infer_type(&negative).default.as_deref(), Some(negative.as_str()));

        assert_eq!(
            infer_type("12345678901234567890").default.as_deref(),
            Some("12345678901234567000")
        );
    }

    #[test]
    fn test_infer_string_default() {
        let inferred = infer_type("my-app");
        assert_eq!(inferred.value_type, ValueType::String);
        assert_eq!(inferred.default.as_deref(), Some("'my-app'"));

        // Not quite numbers
        assert_eq!(infer_type("1.").value_type, ValueType::String);
        assert_eq!(infer_type("1e5").value_type, ValueType::String);
        assert_eq!(infer_type("+1").value_type, ValueType::String);
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("it's"), r"'it\'s'");
        assert_eq!(quote(r"C:\tmp"), r"'C:\\tmp'");
    }

    #[test]
    fn test_render_chain() {
        let item = ParsedItem::new("PORT", "3000", "port");
        assert_eq!(render_chain(&item), r#"schema("PORT").number().default(3000)"#);

        let item = ParsedItem::new("JWT_SECRET", "", "jwtSecret");
        assert_eq!(render_chain(&item), r#"schema("JWT_SECRET").string().required()"#);

        let mut item = ParsedItem::new("LEVEL", "info|debug", "level");
        item.enum_values = Some(vec!["info".to_string(), "debug".to_string()]);
        assert_eq!(
            render_chain(&item),
            r#"schema("LEVEL").string().enum(['info', 'debug'])"#
        );
    }
}
