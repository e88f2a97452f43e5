//! Line grammar for template files
//!
//! Compiled once on first use and shared for the rest of the process.

use regex::Regex;
use std::sync::LazyLock;

/// `KEY=VALUE`, key is an uppercase identifier of at least two characters
pub static ENV_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][A-Z0-9_]+)=(.*)$").expect("valid env line regex"));

/// `# @group: app.database`, case-insensitive
pub static GROUP_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#\s*@group:\s*(.+)$").expect("valid group directive regex"));

/// Two or more `|`-separated bare tokens
static ENUM_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(\|[A-Za-z0-9_-]+)+$").expect("valid enum regex")
});

/// Argument of a group directive line, if the line is one
pub fn group_directive(line: &str) -> Option<&str> {
    GROUP_DIRECTIVE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Key and raw value of an assignment line
pub fn env_assignment(line: &str) -> Option<(&str, &str)> {
    let caps = ENV_LINE.captures(line)?;
    let key = caps.get(1)?.as_str();
    let value = caps.get(2).map_or("", |m| m.as_str());
    Some((key, value))
}

/// Split `info|debug|warn` into its tokens; `None` for anything else
pub fn detect_enum(value: &str) -> Option<Vec<String>> {
    let value = value.trim();
    if !ENUM_VALUE.is_match(value) {
        return None;
    }
    Some(value.split('|').map(|v| v.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_directive() {
        assert_eq!(group_directive("# @group: app"), Some("app"));
        assert_eq!(group_directive("#@GROUP:app.db"), Some("app.db"));
        assert_eq!(group_directive("# plain comment"), None);
        assert_eq!(group_directive("# @group:"), None);
    }

    #[test]
    fn test_env_assignment() {
        assert_eq!(env_assignment("APP_NAME=my-app"), Some(("APP_NAME", "my-app")));
        assert_eq!(env_assignment("SECRET="), Some(("SECRET", "")));
        assert_eq!(env_assignment("URL=a=b"), Some(("URL", "a=b")));
        assert_eq!(env_assignment("lower=1"), None);
        assert_eq!(env_assignment("A=1"), None);
        assert_eq!(env_assignment("INVALID LINE"), None);
    }

    #[test]
    fn test_detect_enum() {
        assert_eq!(
            detect_enum("info|debug|warn"),
            Some(vec!["info".to_string(), "debug".to_string(), "warn".to_string()])
        );
        assert_eq!(
            detect_enum(" dev|prod-eu "),
            Some(vec!["dev".to_string(), "prod-eu".to_string()])
        );
        assert_eq!(detect_enum("info"), None);
        assert_eq!(detect_enum("a|"), None);
        assert_eq!(detect_enum("a | b"), None);
        assert_eq!(detect_enum(""), None);
    }
}
