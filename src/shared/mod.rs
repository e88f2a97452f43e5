//! Helpers shared between the parser and the generator

pub mod case;

pub use case::{parse_group_path, strip_prefix_if_match, to_camel_case};
