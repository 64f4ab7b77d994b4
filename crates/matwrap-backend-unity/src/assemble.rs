//! Class body assembly for the material wrapper and its loader.
//!
//! Bodies are rendered without their enclosing class declaration; see
//! [`crate::emit`] for the file boilerplate.

use matwrap_ir::ShaderDocument;

use crate::ident::IdentifierTable;
use crate::synth::{property_comment, synthesize_accessors, synthesize_parse_targets};
use crate::writer::{SourceWriter, string_literal};

/// Body of the material wrapper class `class_name : Material`.
///
/// Order: identifier storage class, shader comparison helper, one accessor
/// block per property, constructors.
pub fn materials_wrapper_body(
    doc: &ShaderDocument,
    ids: &IdentifierTable,
    class_name: &str,
) -> String {
    let mut w = SourceWriter::new();

    log::info!("synthesizing property storage class");
    write_properties_class(&mut w, doc, ids);
    w.blank();

    log::info!("synthesizing UsesSameShader");
    w.line("// Is some random material this material");
    w.open("public static bool UsesSameShader(Material m)");
    w.line("return m.shader.name == Properties.shaderName;");
    w.close();

    log::info!("synthesizing {} accessor block(s)", doc.properties.len());
    for (prop, entry) in doc.properties.iter().zip(ids.entries()) {
        w.blank();
        w.line(property_comment(prop));
        for (i, accessor) in synthesize_accessors(prop, entry).iter().enumerate() {
            if i > 0 {
                w.blank();
            }
            w.block(&accessor.render());
        }
    }

    log::info!("synthesizing constructors");
    w.blank();
    w.open(format!("public {class_name}() : base(Properties.shader)"));
    w.close();
    w.blank();
    w.open(format!("public {class_name}(string contents) : base(contents)"));
    w.line("base.shader = Properties.shader;");
    w.close();
    w.blank();
    w.open(format!("public {class_name}(Material material) : base(material)"));
    w.line("// Throw exception if this material was not the proper material");
    w.line("if (material.shader.name != Properties.shaderName)");
    w.line(
        "    throw new InvalidOperationException(String.Format(\
         \"Type Mismatch: {0} shader required, found {1}\", \
         Properties.shaderName, material.shader.name));",
    );
    w.close();

    w.finish()
}

/// Nested `Properties` class: shader name, key constants, cached ids and the
/// lazily created instance that resolves them.
fn write_properties_class(w: &mut SourceWriter, doc: &ShaderDocument, ids: &IdentifierTable) {
    w.line("// Internal property ID tracking object");
    w.open("protected class Properties");

    w.line("// Return the shader for this wrapper");
    w.line(format!(
        "public const string shaderName = {};",
        string_literal(&doc.display_name)
    ));
    w.open("public static Shader shader");
    w.line("get { return Shader.Find (shaderName); }");
    w.close();
    w.blank();

    for (prop, entry) in doc.properties.iter().zip(ids.entries()) {
        w.line(property_comment(prop));
        w.line(format!(
            "public const string {} = {};",
            entry.key_const,
            string_literal(&entry.key)
        ));
        w.line(format!("public int {} {{ get; private set; }}", entry.id_field));
        w.blank();
    }

    w.line("// Created on first access, reused afterwards");
    w.line(
        "private static readonly Lazy<Properties> instance = \
         new Lazy<Properties>(() => new Properties());",
    );
    w.open("public static Properties Instance");
    w.line("get { return instance.Value; }");
    w.close();
    w.blank();

    w.open("private Properties()");
    for entry in ids.entries() {
        w.line(format!(
            "{} = Shader.PropertyToID({});",
            entry.id_field, entry.key_const
        ));
    }
    w.close();

    w.close();
}

/// Body of the loader class `<class_name>Loader : <class_name>`.
pub fn loader_wrapper_body(doc: &ShaderDocument, class_name: &str) -> String {
    let mut w = SourceWriter::new();

    log::info!("synthesizing loader properties");
    for prop in &doc.properties {
        w.line(property_comment(prop));
        for (i, target) in synthesize_parse_targets(prop).iter().enumerate() {
            if i > 0 {
                w.blank();
            }
            w.block(&target.render());
        }
        w.blank();
    }

    log::info!("synthesizing loader constructors");
    let loader = format!("{class_name}Loader");
    w.line("// Constructors");
    w.line(format!("public {loader}() : base() {{ }}"));
    w.line(format!("public {loader}(string contents) : base(contents) {{ }}"));
    w.line(format!("public {loader}(Material material) : base(material) {{ }}"));

    w.finish()
}
