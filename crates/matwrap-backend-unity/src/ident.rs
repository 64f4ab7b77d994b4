//! Identifier table: the per-document mapping from property key to the
//! generated key constant and cached numeric id field.

use matwrap_ir::ShaderDocument;

/// Generated names for one property's identifier storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierEntry {
    /// Raw shader key, e.g. `_MainTex`.
    pub key: String,
    /// Name of the string constant holding the key, e.g. `mainTexKey`.
    pub key_const: String,
    /// Name of the cached `Shader.PropertyToID` field, e.g. `mainTexID`.
    pub id_field: String,
}

/// One entry per property, in document order.
///
/// Built once per document and handed by reference to every accessor. Keys
/// are not deduplicated; a repeated key yields a repeated entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierTable {
    entries: Vec<IdentifierEntry>,
}

impl IdentifierTable {
    pub fn build(doc: &ShaderDocument) -> Self {
        let entries = doc
            .properties
            .iter()
            .map(|prop| IdentifierEntry {
                key: prop.key().to_string(),
                key_const: format!("{}Key", prop.humanized_name()),
                id_field: format!("{}ID", prop.humanized_name()),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[IdentifierEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matwrap_ir::{PropertyModel, TypeTag};

    #[test]
    fn one_entry_per_property() {
        let doc = ShaderDocument::new(
            "S",
            vec![
                PropertyModel::new("_MainTex", TypeTag::Texture2D, "\"white\" {}", "Tex"),
                PropertyModel::new("_Color", TypeTag::Color, "(1,1,1,1)", "Tint"),
                PropertyModel::new("_Color", TypeTag::Color, "(0,0,0,1)", "Tint again"),
            ],
        );
        let table = IdentifierTable::build(&doc);
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.entries()[0],
            IdentifierEntry {
                key: "_MainTex".into(),
                key_const: "mainTexKey".into(),
                id_field: "mainTexID".into(),
            }
        );
        assert_eq!(table.entries()[1], table.entries()[2]);
    }

    #[test]
    fn empty_document() {
        assert!(IdentifierTable::build(&ShaderDocument::default()).is_empty());
    }
}
