//! Config source generator
//!
//! Renders parsed items as a module that declares an envus config:
//! grouped items become nested object literals, ungrouped items follow
//! at the top level. Generation is pure and never fails.

use crate::parser::ParsedItem;

pub mod schema;


pub use schema::{Inferred, ValueType, infer_type, render_chain};

/// Package the generated module imports from
pub const RUNTIME_PACKAGE: &str = "envus";

const INDENT: &str = "  ";

/// Module dialect of the generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// ES module JavaScript
    #[default]
    Js,
    /// ES module TypeScript
    Ts,
    /// CommonJS JavaScript
    Cjs,
}

impl OutputMode {
    /// Parse a mode name (`js`, `ts`, `cjs`) case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "js" | "esm" => Some(OutputMode::Js),
            "ts" | "typescript" => Some(OutputMode::Ts),
            "cjs" | "commonjs" => Some(OutputMode::Cjs),
            _ => None,
        }
    }

    fn header(&self) -> String {
        match self {
            OutputMode::Cjs => format!(
                "const {{ loadEnv, defineConfig, schema }} = require(\"{}\");\n\n",
                RUNTIME_PACKAGE
            ),
            OutputMode::Js | OutputMode::Ts => format!(
                "import {{ loadEnv, defineConfig, schema }} from \"{}\";\n\n",
                RUNTIME_PACKAGE
            ),
        }
    }

    fn export_prefix(&self) -> &'static str {
        match self {
            OutputMode::Cjs => "module.exports.config = defineConfig(",
            OutputMode::Js | OutputMode::Ts => "export const config = defineConfig(",
        }
    }
}

/// Entry of a group node: either a leaf item or a nested group
#[derive(Debug)]
enum Node<'a> {
    Item(&'a ParsedItem),
    Group(GroupTree<'a>),
}

/// Insertion-ordered tree of groups built from item group paths
#[derive(Debug, Default)]
struct GroupTree<'a> {
    entries: Vec<(String, Node<'a>)>,
}

impl<'a> GroupTree<'a> {
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Descend into `key`, creating the group if missing. A leaf item
    /// occupying the same key is replaced in place.
    fn group_mut(&mut self, key: &str) -> &mut GroupTree<'a> {
        let idx = match self.position(key) {
            Some(idx) => {
                if !matches!(self.entries[idx].1, Node::Group(_)) {
                    tracing::warn!("Group '{}' replaces an item with the same name", key);
                    self.entries[idx].1 = Node::Group(GroupTree::default());
                }
                idx
            }
            None => {
                self.entries.push((key.to_string(), Node::Group(GroupTree::default())));
                self.entries.len() - 1
            }
        };

        match &mut self.entries[idx].1 {
            Node::Group(tree) => tree,
            Node::Item(_) => unreachable!("entry was just made a group"),
        }
    }

    fn insert(&mut self, path: &[String], item: &'a ParsedItem) {
        let mut node = self;
        for segment in path {
            node = node.group_mut(segment);
        }

        match node.position(&item.property_name) {
            Some(idx) => node.entries[idx].1 = Node::Item(item),
            None => node
                .entries
                .push((item.property_name.clone(), Node::Item(item))),
        }
    }

    fn render(&self, depth: usize, out: &mut String) {
        let indent = INDENT.repeat(depth);
        for (key, node) in &self.entries {
            match node {
                Node::Item(item) => {
                    out.push_str(&format!("{}{}: {},\n", indent, key, render_chain(item)));
                }
                Node::Group(tree) => {
                    out.push_str(&format!("{}{}: {{\n", indent, key));
                    tree.render(depth + 1, out);
                    out.push_str(&format!("{}}},\n", indent));
                }
            }
        }
    }
}

/// Generate the config module source for `items`
pub fn generate_config_file(items: &[ParsedItem], mode: OutputMode) -> String {
    let mut tree = GroupTree::default();
    let mut top_level = Vec::new();

    for item in items {
        match item.group_path.as_deref() {
            Some(path) if !path.is_empty() => tree.insert(path, item),
            _ => top_level.push(item),
        }
    }

    let mut out = mode.header();
    out.push_str("loadEnv();\n\n");
    out.push_str(mode.export_prefix());
    out.push_str("{\n");

    tree.render(1, &mut out);
    for item in top_level {
        out.push_str(&format!(
            "{}{}: {},\n",
            INDENT,
            item.property_name,
            render_chain(item)
        ));
    }

    out.push_str("});\n");

    tracing::debug!("Generated {} bytes of {:?} config", out.len(), mode);
    out
}
