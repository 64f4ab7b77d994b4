//! Unity material wrapper backend for matwrap.
//!
//! Emits two C# files per shader: a `Material` subclass with one typed
//! accessor per shader property, and a `<Name>Loader` subclass exposing the
//! same properties as `[ParserTarget]` setters for a configuration loader.

mod assemble;
pub mod emit;
mod ident;
pub mod synth;
mod writer;

use std::collections::HashSet;

use matwrap_backend_core::{
    Backend, BackendError, BackendOptions, BackendOutput, Diagnostic, OutputFile,
};
use matwrap_ir::ShaderDocument;

pub use assemble::{loader_wrapper_body, materials_wrapper_body};
pub use ident::{IdentifierEntry, IdentifierTable};

/// Unity material wrapper backend.
#[derive(Debug)]
pub struct UnityBackend;

impl Backend for UnityBackend {
    fn name(&self) -> &str {
        "Unity Material Wrapper"
    }

    fn targets(&self) -> &[&str] {
        &["unity", "unity-material"]
    }

    fn compile(
        &self,
        doc: &ShaderDocument,
        opts: &BackendOptions,
    ) -> Result<BackendOutput, BackendError> {
        opts.validate()?;
        let class_name = &opts.class_name;

        let ids = IdentifierTable::build(doc);
        let wrapper_body = materials_wrapper_body(doc, &ids, class_name);
        let loader_body = loader_wrapper_body(doc, class_name);

        let files = vec![
            OutputFile {
                name: format!("{class_name}.cs"),
                content: emit::wrapper_file(&opts.namespace, class_name, &wrapper_body),
            },
            OutputFile {
                name: format!("{class_name}Loader.cs"),
                content: emit::loader_file(&opts.namespace, class_name, &loader_body),
            },
        ];

        Ok(BackendOutput {
            files,
            diagnostics: diagnose(doc),
        })
    }
}

/// Warnings for documents that still generate but are likely wrong, plus a
/// note with the property and setter counts.
fn diagnose(doc: &ShaderDocument) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if doc.is_unnamed() {
        diagnostics.push(Diagnostic::warning(
            "no shader name found; the wrapper will look up an empty shader name",
        ));
    }
    if doc.properties.is_empty() {
        diagnostics.push(Diagnostic::warning(
            "no properties found; the wrapper has no accessors",
        ));
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for prop in &doc.properties {
        let name = prop.humanized_name();
        if !seen.insert(name) && reported.insert(name) {
            diagnostics.push(Diagnostic::warning(format!(
                "property name '{name}' is declared more than once; generated members will collide"
            )));
        }
    }

    if !doc.properties.is_empty() {
        let setters: usize = doc
            .properties
            .iter()
            .map(|prop| synth::synthesize_parse_targets(prop).len())
            .sum();
        diagnostics.push(Diagnostic::info(format!(
            "{} properties, {setters} loader setters",
            doc.properties.len()
        )));
    }

    diagnostics
}
