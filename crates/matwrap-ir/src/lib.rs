//! Shader document model for matwrap.
//!
//! A [`ShaderDocument`] is the parsed form of a shader source file: the
//! shader's display name plus the ordered list of declared
//! [`PropertyModel`]s. Backends consume it read-only.

mod display;
mod property;

pub use display::dump_document;
pub use property::{PropertyModel, TypeTag, humanize_key};

/// A parsed shader source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShaderDocument {
    /// Name from the `Shader "..."` line, empty when the source has none.
    pub display_name: String,
    /// Declared properties in order of first appearance. Duplicate keys are kept.
    pub properties: Vec<PropertyModel>,
}

impl ShaderDocument {
    /// Creates a document from an already scanned name and property list.
    pub fn new(display_name: impl Into<String>, properties: Vec<PropertyModel>) -> Self {
        Self {
            display_name: display_name.into(),
            properties,
        }
    }

    /// Returns `true` if no `Shader "..."` line was found.
    pub fn is_unnamed(&self) -> bool {
        self.display_name.is_empty()
    }
}
