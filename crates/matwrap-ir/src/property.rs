//! Shader properties and their type tags.

/// The declared kind of a shader property.
///
/// The set is closed: tokens outside it are rejected while parsing, so every
/// backend can match exhaustively.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum TypeTag {
    /// `Color`, an RGBA color.
    Color,
    /// `Float`, an unconstrained scalar.
    Float,
    /// `Range(min, max)`, a scalar clamped on write.
    ///
    /// Bounds are the verbatim (trimmed) source text and are never parsed.
    Range { min: String, max: String },
    /// `Vector`, a four component vector.
    Vector,
    /// `2D` texture.
    Texture2D,
    /// `3D` texture.
    Texture3D,
    /// `CUBE` texture.
    Cubemap,
}

/// One declared shader property.
///
/// Immutable once constructed. The humanized name is always derived from the
/// key and cannot be set on its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyModel {
    key: String,
    humanized_name: String,
    type_tag: TypeTag,
    initializer: String,
    description: String,
}

impl PropertyModel {
    pub fn new(
        key: impl Into<String>,
        type_tag: TypeTag,
        initializer: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let humanized_name = humanize_key(&key);
        Self {
            key,
            humanized_name,
            type_tag,
            initializer: initializer.into(),
            description: description.into(),
        }
    }

    /// Raw identifier as declared, e.g. `_MainTex`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Base for every generated identifier, e.g. `mainTex`.
    pub fn humanized_name(&self) -> &str {
        &self.humanized_name
    }

    pub fn type_tag(&self) -> &TypeTag {
        &self.type_tag
    }

    /// Default value text, stored verbatim.
    pub fn initializer(&self) -> &str {
        &self.initializer
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Strips one leading `_` from `key` and lower-cases the first letter.
///
/// A name starting with two capitals (`ZWrite`, `UVSec`) is left as is, so
/// acronym-led keys keep the configuration names loaders already use.
pub fn humanize_key(key: &str) -> String {
    let stripped = key.strip_prefix('_').unwrap_or(key);
    let mut chars = stripped.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            stripped.to_string()
        }
        (Some(first), _) => first.to_lowercase().chain(stripped.chars().skip(1)).collect(),
        (None, _) => String::new(),
    }
}
