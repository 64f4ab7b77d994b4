#![warn(missing_docs)]
//! Backend trait and plugin architecture for matwrap.
//!
//! Defines the [`Backend`] trait that all wrapper generators implement,
//! along with supporting types ([`BackendOptions`], [`BackendOutput`],
//! [`BackendError`]) and a [`BackendRegistry`] for CLI dispatch.

use std::fmt::{self, Debug};
use std::path::Path;

use matwrap_ir::ShaderDocument;

/// A backend that turns a parsed shader document into generated sources.
pub trait Backend: Debug + Send + Sync {
    /// Human-readable name (e.g. "Unity material wrapper").
    fn name(&self) -> &str;

    /// Target identifiers this backend handles (for `--target` dispatch).
    fn targets(&self) -> &[&str];

    /// Generate every output file for `doc`.
    ///
    /// Implementations must build all files before returning; callers write
    /// nothing unless this returns `Ok`.
    fn compile(
        &self,
        doc: &ShaderDocument,
        opts: &BackendOptions,
    ) -> Result<BackendOutput, BackendError>;
}

/// Options passed to a backend during generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendOptions {
    /// Namespace that encloses the generated classes (may be dotted).
    pub namespace: String,
    /// Base class name, usually derived with [`class_name_from_path`].
    pub class_name: String,
}

impl BackendOptions {
    /// Creates options for the given namespace and class name.
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
        }
    }

    /// Checks that both names can appear in generated source.
    pub fn validate(&self) -> Result<(), BackendError> {
        if !self.namespace.split('.').all(is_identifier) {
            return Err(BackendError::InvalidOption(format!(
                "namespace '{}' is not a valid identifier path",
                self.namespace
            )));
        }
        if !is_identifier(&self.class_name) {
            return Err(BackendError::InvalidOption(format!(
                "class name '{}' is not a valid identifier",
                self.class_name
            )));
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Derives a class name from a shader file path.
///
/// Takes the file name, drops its last extension and removes whitespace,
/// `/`, `-` and `,`.
pub fn class_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => &file_name[..dot],
        _ => file_name.as_str(),
    };
    stem.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '-' | ','))
        .collect()
}

/// The output produced by a backend.
#[derive(Clone, Debug)]
pub struct BackendOutput {
    /// One or more output files.
    pub files: Vec<OutputFile>,
    /// Non-fatal diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for BackendOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s), {} diagnostic(s)",
            self.files.len(),
            self.diagnostics.len()
        )
    }
}

/// A single generated text file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
    /// File name relative to the output directory (e.g. "Ocean.cs").
    pub name: String,
    /// UTF-8 file content.
    pub content: String,
}

/// A non-fatal diagnostic message from a backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub level: DiagnosticLevel,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    /// Creates an informational note.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Severity level for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// Output was produced but is probably not what the user wants.
    Warning,
    /// An informational note.
    Info,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "Warning",
            Self::Info => "Info",
        })
    }
}

/// Errors that can occur during generation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// A [`BackendOptions`] value cannot be used in generated source.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

/// Registry of available backends, used for CLI `--target` dispatch.
pub struct BackendRegistry {
    backends: Vec<Box<dyn Backend>>,
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Creates a registry pre-populated with built-in backends.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register(Box::new(DocDumpBackend));
        reg
    }

    /// Registers a backend.
    pub fn register(&mut self, backend: Box<dyn Backend>) {
        self.backends.push(backend);
    }

    /// Finds a backend that handles the given target identifier.
    pub fn find(&self, target: &str) -> Option<&dyn Backend> {
        self.backends
            .iter()
            .find(|b| b.targets().contains(&target))
            .map(|b| &**b)
    }

    /// Lists all supported target identifiers.
    pub fn list_targets(&self) -> Vec<&str> {
        self.backends
            .iter()
            .flat_map(|b| b.targets().iter().copied())
            .collect()
    }
}

/// Built-in backend that dumps the document as text using
/// [`matwrap_ir::dump_document`].
#[derive(Debug)]
pub struct DocDumpBackend;

impl Backend for DocDumpBackend {
    fn name(&self) -> &str {
        "Document Dump"
    }

    fn targets(&self) -> &[&str] {
        &["doc-dump", "doc"]
    }

    fn compile(
        &self,
        doc: &ShaderDocument,
        opts: &BackendOptions,
    ) -> Result<BackendOutput, BackendError> {
        Ok(BackendOutput {
            files: vec![OutputFile {
                name: format!("{}.txt", opts.class_name),
                content: matwrap_ir::dump_document(doc),
            }],
            diagnostics: vec![],
        })
    }
}
