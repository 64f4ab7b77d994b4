//! File boilerplate around the assembled class bodies.

use crate::writer::SourceWriter;

const HEADER: &str = "// Material wrapper generated by shader translator tool";
const USINGS: [&str; 3] = ["using System;", "using System.Reflection;", "using UnityEngine;"];

/// Inner namespace of the material wrapper file.
pub const WRAPPER_NAMESPACE: &str = "MaterialWrapper";
/// Inner namespace of the loader file.
pub const LOADER_NAMESPACE: &str = "Configuration";

/// `<class_name>.cs`: `public class <class_name> : Material`.
pub fn wrapper_file(namespace: &str, class_name: &str, body: &str) -> String {
    let mut w = SourceWriter::new();
    write_header(&mut w);
    wrap_class(
        &mut w,
        namespace,
        WRAPPER_NAMESPACE,
        &format!("public class {class_name} : Material"),
        body,
    );
    w.finish()
}

/// `<class_name>Loader.cs`: `public class <class_name>Loader : <class_name>`.
pub fn loader_file(namespace: &str, class_name: &str, body: &str) -> String {
    let mut w = SourceWriter::new();
    write_header(&mut w);
    w.line(format!("using {namespace}.{WRAPPER_NAMESPACE};"));
    w.blank();
    wrap_class(
        &mut w,
        namespace,
        LOADER_NAMESPACE,
        &format!("public class {class_name}Loader : {class_name}"),
        body,
    );
    w.finish()
}

fn write_header(w: &mut SourceWriter) {
    w.line(HEADER);
    for using in USINGS {
        w.line(using);
    }
    w.blank();
}

fn wrap_class(w: &mut SourceWriter, namespace: &str, inner: &str, declaration: &str, body: &str) {
    w.open(format!("namespace {namespace}"));
    w.open(format!("namespace {inner}"));
    w.open(declaration);
    w.block(body);
    w.close();
    w.close();
    w.close();
}
