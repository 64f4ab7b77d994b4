use matwrap_backend_core::{Backend, BackendError, BackendOptions, BackendOutput};
use matwrap_backend_unity::UnityBackend;
use matwrap_parser::ParseError;

/// Parse shader source and compile it with the Unity backend.
#[allow(dead_code)]
pub fn generate(source: &str, namespace: &str, class_name: &str) -> BackendOutput {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = matwrap_parser::parse(source).expect("shader parse failed");
    UnityBackend
        .compile(&doc, &BackendOptions::new(namespace, class_name))
        .expect("wrapper generation failed")
}

/// Error from either stage of the pipeline.
#[allow(dead_code)]
#[derive(Debug)]
pub enum PipelineError {
    Parse(ParseError),
    Backend(BackendError),
}

/// Like [`generate`], but returns the first failure instead of panicking.
#[allow(dead_code)]
pub fn try_generate(
    source: &str,
    backend: &dyn Backend,
    opts: &BackendOptions,
) -> Result<BackendOutput, PipelineError> {
    let doc = matwrap_parser::parse(source).map_err(PipelineError::Parse)?;
    backend.compile(&doc, opts).map_err(PipelineError::Backend)
}

/// Load a demo shader by file name (without extension).
#[allow(dead_code)]
pub fn load_demo(name: &str) -> String {
    let path = format!("{}/../../demos/{name}.shader", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to load {path}: {e}"))
}
