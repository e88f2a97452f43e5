//! Single-pass line scanner
//!
//! Classifies each template line in order: blank, group directive, comment,
//! assignment. The only state carried between lines is the current group
//! path and the set of keys already seen.

use std::collections::HashSet;

use super::patterns::{detect_enum, env_assignment, group_directive};
use super::{Diagnostic, GroupingMode, ParseResult, ParsedItem, ParserOptions};
use crate::shared::{parse_group_path, strip_prefix_if_match, to_camel_case};

/// Mutable state threaded through the line loop
#[derive(Debug, Default)]
struct ScanState {
    current_group: Option<Vec<String>>,
    seen_keys: HashSet<String>,
}

/// Parse `.env.example` text into items and diagnostics
pub fn parse_env_example(text: &str, options: &ParserOptions) -> ParseResult {
    let mut result = ParseResult::default();
    let mut state = ScanState::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let line_number = idx + 1;

        if options.flat {
            scan_flat_line(line, line_number, &mut result);
        } else {
            scan_grouped_line(line, line_number, options, &mut state, &mut result);
        }
    }

    tracing::debug!(
        "Parsed {} items with {} diagnostics",
        result.items.len(),
        result.diagnostics.len()
    );
    result
}

/// Flat mode: comments and blanks are skipped, no groups, no duplicate check
fn scan_flat_line(line: &str, line_number: usize, result: &mut ParseResult) {
    if line.is_empty() || line.starts_with('#') {
        return;
    }

    let Some((key, value)) = env_assignment(line) else {
        result.diagnostics.push(invalid_line(line_number, line));
        return;
    };

    result.items.push(ParsedItem {
        full_key: key.to_string(),
        value_sample: value.to_string(),
        property_name: to_camel_case(key),
        group_path: None,
        enum_values: detect_enum(value),
    });
}

fn scan_grouped_line(
    line: &str,
    line_number: usize,
    options: &ParserOptions,
    state: &mut ScanState,
    result: &mut ParseResult,
) {
    if line.is_empty() {
        if options.break_groups && state.current_group.take().is_some() {
            tracing::trace!("Line {}: blank line closed group", line_number);
        }
        return;
    }

    if line.starts_with('#') {
        let honors_directives =
            options.enable_grouping && options.grouping_mode == GroupingMode::Explicit;

        if let Some(argument) = group_directive(line).filter(|_| honors_directives) {
            match parse_group_path(argument) {
                Ok(path) => {
                    tracing::debug!("Line {}: entering group {}", line_number, path.join("."));
                    state.current_group = Some(path);
                }
                Err(e) => result.diagnostics.push(Diagnostic::error(
                    line_number,
                    format!("Invalid group directive: {}", e),
                )),
            }
        }
        // Plain comments, and directives in pattern mode, are skipped silently
        return;
    }

    let Some((key, value)) = env_assignment(line) else {
        result.diagnostics.push(invalid_line(line_number, line));
        return;
    };

    if !state.seen_keys.insert(key.to_string()) {
        result.diagnostics.push(Diagnostic::warning(
            line_number,
            format!("Duplicate key detected: \"{}\"", key),
        ));
    }

    let mut property_key = key;
    let mut group_path = state.current_group.clone();

    if options.enable_grouping {
        match (options.grouping_mode, &state.current_group) {
            (GroupingMode::Pattern, None) => {
                let (group, remainder) = pattern_group(key);
                tracing::trace!("Line {}: {} grouped by prefix as {}", line_number, key, group);
                group_path = Some(vec![group]);
                property_key = remainder;
            }
            (GroupingMode::Explicit, Some(path)) => {
                if let Some(last) = path.last() {
                    property_key = strip_prefix_if_match(key, last);
                }
            }
            _ => {}
        }
    }

    result.items.push(ParsedItem {
        full_key: key.to_string(),
        value_sample: value.to_string(),
        property_name: to_camel_case(property_key),
        group_path,
        enum_values: detect_enum(value),
    });
}

/// Derive a group from the key's first `_` segment and the key without that prefix
fn pattern_group(key: &str) -> (String, &str) {
    let prefix = key.split('_').next().unwrap_or(key);
    let group = to_camel_case(prefix);
    let remainder = key
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(key);
    (group, remainder)
}

fn invalid_line(line_number: usize, line: &str) -> Diagnostic {
    Diagnostic::warning(
        line_number,
        format!("Invalid env line format: \"{}\". Expected KEY=VALUE.", line),
    )
}
