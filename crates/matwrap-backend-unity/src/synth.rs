//! Per-property code synthesis.
//!
//! Each property becomes a handful of structured fragments: [`Accessor`]s for
//! the material wrapper and [`ParseTarget`]s for the loader. Fragments are
//! plain data until [`Accessor::render`] / [`ParseTarget::render`] turn them
//! into C#, which keeps the type dispatch testable on its own.

use std::fmt;

use matwrap_ir::{PropertyModel, TypeTag};

use crate::ident::IdentifierEntry;
use crate::writer::SourceWriter;

/// How an accessor addresses its material property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyHandle {
    /// Through the cached numeric id, `Properties.Instance.<field>`.
    Cached(String),
    /// Through the raw key constant, `Properties.<const>`.
    Key(String),
}

impl fmt::Display for PropertyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cached(field) => write!(f, "Properties.Instance.{field}"),
            Self::Key(name) => write!(f, "Properties.{name}"),
        }
    }
}

/// A get/set property on the material wrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accessor {
    /// C# type of the property, e.g. `Vector4`.
    pub value_type: &'static str,
    pub name: String,
    pub handle: PropertyHandle,
    /// `Material` getter, e.g. `GetFloat`.
    pub getter: &'static str,
    /// `Material` setter, e.g. `SetFloat`.
    pub setter: &'static str,
    /// Texture kind the getter result is cast to with `as`.
    pub downcast: Option<&'static str>,
    /// Bounds applied with `Mathf.Clamp` on write only.
    pub clamp: Option<(String, String)>,
}

impl Accessor {
    fn new(
        value_type: &'static str,
        name: impl Into<String>,
        handle: PropertyHandle,
        getter: &'static str,
        setter: &'static str,
    ) -> Self {
        Self {
            value_type,
            name: name.into(),
            handle,
            getter,
            setter,
            downcast: None,
            clamp: None,
        }
    }

    pub fn get_expr(&self) -> String {
        match self.downcast {
            Some(kind) => format!("{} ({}) as {kind}", self.getter, self.handle),
            None => format!("{} ({})", self.getter, self.handle),
        }
    }

    pub fn set_expr(&self) -> String {
        match &self.clamp {
            Some((min, max)) => format!(
                "{} ({}, Mathf.Clamp(value, {min}f, {max}f))",
                self.setter, self.handle
            ),
            None => format!("{} ({}, value)", self.setter, self.handle),
        }
    }

    pub fn render(&self) -> String {
        let mut w = SourceWriter::new();
        w.open(format!("public {} {}", self.value_type, self.name));
        w.line(format!("get {{ return {}; }}", self.get_expr()));
        w.line(format!("set {{ {}; }}", self.set_expr()));
        w.close();
        w.finish()
    }
}

/// Parser types the configuration loader binds setters to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserKind {
    Color,
    Numeric,
    Vector4,
    Vector2,
    Texture2D,
    Texture3D,
    Cubemap,
}

impl ParserKind {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Color => "ColorParser",
            Self::Numeric => "NumericParser<float>",
            Self::Vector4 => "Vector4Parser",
            Self::Vector2 => "Vector2Parser",
            Self::Texture2D => "Texture2DParser",
            Self::Texture3D => "Texture3DParser",
            Self::Cubemap => "TextureCubeParser",
        }
    }

    /// Parser for the main setter of a property of the given type.
    pub fn for_type(tag: &TypeTag) -> Self {
        match tag {
            TypeTag::Color => Self::Color,
            TypeTag::Float | TypeTag::Range { .. } => Self::Numeric,
            TypeTag::Vector => Self::Vector4,
            TypeTag::Texture2D => Self::Texture2D,
            TypeTag::Texture3D => Self::Texture3D,
            TypeTag::Cubemap => Self::Cubemap,
        }
    }
}

/// Member visibility of a generated setter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Private => "private",
        })
    }
}

/// A `[ParserTarget]` setter on the loader that forwards to a wrapper accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTarget {
    /// Accessor this setter forwards to; also the configuration node name.
    pub member: String,
    pub parser: ParserKind,
    pub visibility: Visibility,
    pub optional: bool,
}

impl ParseTarget {
    fn new(member: impl Into<String>, parser: ParserKind, visibility: Visibility) -> Self {
        Self {
            member: member.into(),
            parser,
            visibility,
            optional: true,
        }
    }

    pub fn setter_name(&self) -> String {
        format!("{}Setter", self.member)
    }

    pub fn render(&self) -> String {
        let mut w = SourceWriter::new();
        w.line(format!(
            "[ParserTarget(\"{}\", optional = {})]",
            self.member, self.optional
        ));
        w.open(format!(
            "{} {} {}",
            self.visibility,
            self.parser.type_name(),
            self.setter_name()
        ));
        w.line(format!("get {{ return {}; }}", self.member));
        w.line(format!("set {{ {} = value; }}", self.member));
        w.close();
        w.finish()
    }
}

/// `// <description>, default = <initializer>`.
pub fn property_comment(prop: &PropertyModel) -> String {
    format!("// {}, default = {}", prop.description(), prop.initializer())
}

/// Material wrapper accessors for one property.
///
/// `ids` is this property's entry in the document's identifier table.
pub fn synthesize_accessors(prop: &PropertyModel, ids: &IdentifierEntry) -> Vec<Accessor> {
    let name = prop.humanized_name();
    let cached = || PropertyHandle::Cached(ids.id_field.clone());

    match prop.type_tag() {
        TypeTag::Color => vec![Accessor::new("Color", name, cached(), "GetColor", "SetColor")],
        TypeTag::Float => vec![Accessor::new("float", name, cached(), "GetFloat", "SetFloat")],
        TypeTag::Range { min, max } => {
            let mut accessor = Accessor::new("float", name, cached(), "GetFloat", "SetFloat");
            accessor.clamp = Some((min.clone(), max.clone()));
            vec![accessor]
        }
        TypeTag::Vector => vec![Accessor::new(
            "Vector4",
            name,
            cached(),
            "GetVector",
            "SetVector",
        )],
        TypeTag::Texture2D => {
            // Scale and offset go through the string key, not the cached id.
            let key = || PropertyHandle::Key(ids.key_const.clone());
            vec![
                texture_accessor("Texture2D", name, cached()),
                Accessor::new(
                    "Vector2",
                    format!("{name}Scale"),
                    key(),
                    "GetTextureScale",
                    "SetTextureScale",
                ),
                Accessor::new(
                    "Vector2",
                    format!("{name}Offset"),
                    key(),
                    "GetTextureOffset",
                    "SetTextureOffset",
                ),
            ]
        }
        TypeTag::Texture3D => vec![texture_accessor("Texture3D", name, cached())],
        TypeTag::Cubemap => vec![texture_accessor("Cubemap", name, cached())],
    }
}

fn texture_accessor(kind: &'static str, name: &str, handle: PropertyHandle) -> Accessor {
    let mut accessor = Accessor::new(kind, name, handle, "GetTexture", "SetTexture");
    accessor.downcast = Some(kind);
    accessor
}

/// Loader setters for one property.
pub fn synthesize_parse_targets(prop: &PropertyModel) -> Vec<ParseTarget> {
    let name = prop.humanized_name();
    let mut targets = vec![ParseTarget::new(
        name,
        ParserKind::for_type(prop.type_tag()),
        Visibility::Public,
    )];
    if matches!(prop.type_tag(), TypeTag::Texture2D) {
        targets.push(ParseTarget::new(
            format!("{name}Scale"),
            ParserKind::Vector2,
            Visibility::Private,
        ));
        targets.push(ParseTarget::new(
            format!("{name}Offset"),
            ParserKind::Vector2,
            Visibility::Private,
        ));
    }
    targets
}
