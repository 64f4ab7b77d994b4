//! Shader source scanner for matwrap.
//!
//! Turns the text of a `.shader` file into a [`matwrap_ir::ShaderDocument`].
//! Scanning is line based: one pass looks for the `Shader "<name>"` line and
//! an independent pass collects every property declaration line. Nothing
//! else about the file's block structure is interpreted.

pub mod grammar;
mod resolve;

pub use resolve::resolve_type;

use matwrap_ir::{PropertyModel, ShaderDocument};

use crate::grammar::{match_name_line, match_property_line};

/// Parse shader source into a document.
///
/// A missing name line is not an error; the document simply has an empty
/// display name. A property with an unknown or malformed type aborts the
/// whole parse.
pub fn parse(source: &str) -> Result<ShaderDocument, ParseError> {
    let lines: Vec<&str> = source.lines().collect();

    let display_name = scan_display_name(&lines);
    if display_name.is_empty() {
        log::warn!("no `Shader \"...\"` line found; shader name will be empty");
    }

    log::info!("discovering properties for \"{display_name}\"");
    let properties = scan_properties(&lines)?;
    if properties.is_empty() {
        log::warn!("no property declarations found");
    }

    Ok(ShaderDocument::new(display_name, properties))
}

/// Returns the name from the first `Shader "<name>"` line, or an empty string.
pub fn scan_display_name(lines: &[&str]) -> String {
    lines
        .iter()
        .find_map(|line| match_name_line(line))
        .unwrap_or_default()
        .to_string()
}

/// Collects every property declaration in encounter order.
pub fn scan_properties(lines: &[&str]) -> Result<Vec<PropertyModel>, ParseError> {
    let mut properties = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let Some(decl) = match_property_line(line) else {
            continue;
        };
        let type_tag = resolve_type(decl.key, decl.type_token)?;
        log::debug!(
            "line {}: property {} ({})",
            index + 1,
            decl.key,
            decl.type_token
        );
        properties.push(PropertyModel::new(
            decl.key,
            type_tag,
            decl.initializer,
            decl.description,
        ));
    }
    Ok(properties)
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("property `{key}` has an unrecognized type `{token}`")]
    UnrecognizedType { key: String, token: String },
    #[error("property `{key}` has malformed range bounds in `{token}`")]
    MalformedRangeBounds { key: String, token: String },
}
