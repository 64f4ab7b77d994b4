//! Display implementations and text dump for debugging.

use std::fmt;

use crate::ShaderDocument;
use crate::property::{PropertyModel, TypeTag};

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => write!(f, "Color"),
            Self::Float => write!(f, "Float"),
            Self::Range { min, max } => write!(f, "Range({min},{max})"),
            Self::Vector => write!(f, "Vector"),
            Self::Texture2D => write!(f, "2D"),
            Self::Texture3D => write!(f, "3D"),
            Self::Cubemap => write!(f, "CUBE"),
        }
    }
}

impl fmt::Display for PropertyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} = {}",
            self.key(),
            self.humanized_name(),
            self.type_tag(),
            self.initializer()
        )?;
        if !self.description().is_empty() {
            write!(f, "  // {}", self.description())?;
        }
        Ok(())
    }
}

/// Dump a document as human-readable text.
pub fn dump_document(doc: &ShaderDocument) -> String {
    let mut out = String::new();

    out.push_str(&format!("Shader: \"{}\"\n", doc.display_name));

    if doc.properties.is_empty() {
        out.push_str("Properties: (none)\n");
        return out;
    }

    out.push_str("Properties:\n");
    for (index, prop) in doc.properties.iter().enumerate() {
        out.push_str(&format!("  [{index}] {prop}\n"));
    }
    out
}
