mod common;

use common::PipelineError;
use matwrap_backend_core::{BackendError, BackendOptions, DocDumpBackend};
use matwrap_backend_unity::UnityBackend;
use matwrap_parser::ParseError;

fn opts() -> BackendOptions {
    BackendOptions::new("Kopernicus", "Broken")
}

#[test]
fn unknown_type_aborts_before_generation() {
    let result = common::try_generate(&common::load_demo("bogus-type"), &UnityBackend, &opts());
    match result {
        Err(PipelineError::Parse(ParseError::UnrecognizedType { key, token })) => {
            assert_eq!(key, "_Mystery");
            assert_eq!(token, "Bogus");
        }
        other => panic!("expected UnrecognizedType, got {other:?}"),
    }
}

#[test]
fn malformed_range_aborts() {
    let source = "Shader \"R\" {\n    _Cutoff (\"Alpha cutoff\", Range) = 0.5\n}\n";
    let result = common::try_generate(source, &UnityBackend, &opts());
    assert!(matches!(
        result,
        Err(PipelineError::Parse(ParseError::MalformedRangeBounds { .. }))
    ));
}

#[test]
fn later_bad_property_fails_whole_document() {
    // Earlier valid properties do not produce partial output.
    let source = "\
Shader \"Partial\" {
    _Color (\"Tint\", Color) = (1,1,1,1)
    _MainTex (\"Tex\", 2D) = \"white\" {}
    _Steps (\"Steps\", Int) = 4
}
";
    let result = common::try_generate(source, &UnityBackend, &opts());
    assert!(matches!(
        result,
        Err(PipelineError::Parse(ParseError::UnrecognizedType { .. }))
    ));
}

#[test]
fn invalid_namespace_is_rejected() {
    let result = common::try_generate(
        &common::load_demo("ocean-surface"),
        &UnityBackend,
        &BackendOptions::new("Not A Namespace", "Ocean"),
    );
    assert!(matches!(
        result,
        Err(PipelineError::Backend(BackendError::InvalidOption(_)))
    ));
}

#[test]
fn doc_dump_handles_empty_source() {
    let output = common::try_generate("", &DocDumpBackend, &opts()).unwrap();
    assert_eq!(output.files.len(), 1);
    assert_eq!(output.files[0].name, "Broken.txt");
    assert!(output.files[0].content.contains("(none)"));
}

#[test]
fn error_messages_name_the_property() {
    let err = matwrap_parser::parse(&common::load_demo("bogus-type")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("_Mystery"));
    assert!(msg.contains("Bogus"));
}
