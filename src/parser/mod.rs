//! Template parser for `.env.example` files
//!
//! Turns raw template text into an ordered list of [`ParsedItem`]s plus
//! line-tagged [`Diagnostic`]s. Parsing never stops early: every line is
//! classified and the caller decides whether the diagnostics are fatal.

use serde::Serialize;

pub mod patterns;
pub mod scanner;


pub use scanner::parse_env_example;

/// A single `KEY=VALUE` declaration from the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedItem {
    /// Original env key, e.g. `DATABASE_URL`
    pub full_key: String,

    /// Raw right-hand side of the assignment
    pub value_sample: String,

    /// camelCase property name used in the generated config
    pub property_name: String,

    /// Group segments, outermost first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_path: Option<Vec<String>>,

    /// Allowed values when the sample is a `a|b|c` enumeration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl ParsedItem {
    /// Item without grouping or enum information
    pub fn new(full_key: &str, value_sample: &str, property_name: &str) -> Self {
        Self {
            full_key: full_key.to_string(),
            value_sample: value_sample.to_string(),
            property_name: property_name.to_string(),
            group_path: None,
            enum_values: None,
        }
    }

    /// Whether the item belongs to a non-empty group
    pub fn is_grouped(&self) -> bool {
        self.group_path.as_ref().is_some_and(|path| !path.is_empty())
    }
}

/// Severity of a parser diagnostic
///
/// Warnings never block generation; any error aborts before output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A problem found on a specific template line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based source line
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {}): {}", self.severity, self.line, self.message)
    }
}

/// How groups are assigned when grouping is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingMode {
    /// `# @group: a.b` directives open a group until the next blank line
    #[default]
    Explicit,
    /// Group derived from the key's first `_` segment; directives are ignored
    Pattern,
}

impl GroupingMode {
    /// Parse a mode name case-insensitively, `None` when unknown
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "explicit" => Some(GroupingMode::Explicit),
            "pattern" => Some(GroupingMode::Pattern),
            _ => None,
        }
    }
}

/// Parser behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    pub enable_grouping: bool,
    pub grouping_mode: GroupingMode,
    /// Blank lines close the current group
    pub break_groups: bool,
    /// Disable grouping and comment semantics entirely
    pub flat: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            enable_grouping: true,
            grouping_mode: GroupingMode::Explicit,
            break_groups: true,
            flat: false,
        }
    }
}

impl ParserOptions {
    pub fn flat() -> Self {
        Self {
            enable_grouping: false,
            flat: true,
            ..Self::default()
        }
    }

    pub fn pattern() -> Self {
        Self {
            grouping_mode: GroupingMode::Pattern,
            ..Self::default()
        }
    }
}

/// Output of a full parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub items: Vec<ParsedItem>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}
