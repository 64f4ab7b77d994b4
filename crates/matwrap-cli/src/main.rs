use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use miette::{Context, IntoDiagnostic};

use matwrap_backend_core::{BackendOptions, BackendRegistry, class_name_from_path};
use matwrap_backend_unity::UnityBackend;

/// matwrap: Unity material wrapper generator
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Input .shader file
    input: PathBuf,

    /// Namespace of the generated classes
    namespace: String,

    /// Target backend (default: unity)
    #[arg(short, long, default_value = "unity")]
    target: String,

    /// Directory the generated files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Dump the parsed shader document to stderr
    #[arg(long)]
    emit_doc: bool,

    /// Parse and generate without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Missing positionals are not an error: print usage and exit cleanly.
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            eprintln!("{}", Cli::command().render_usage());
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };

    init_logger(cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: &Cli) -> miette::Result<()> {
    let class_name = class_name_from_path(&cli.input);
    log::info!(
        "processing \"{}\" ==> {class_name}",
        cli.input.display()
    );

    // 1. Read source file.
    let source = std::fs::read_to_string(&cli.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", cli.input.display()))?;

    // 2. Scan the shader into a document.
    let doc = matwrap_parser::parse(&source)
        .map_err(|e| miette::miette!("{e}"))
        .wrap_err("shader parse failed")?;

    // 3. Optionally dump the document to stderr.
    if cli.emit_doc {
        eprintln!("{}", matwrap_ir::dump_document(&doc));
    }

    // 4. Backend dispatch.
    let mut registry = BackendRegistry::with_builtins();
    registry.register(Box::new(UnityBackend));
    let backend = registry.find(&cli.target).ok_or_else(|| {
        let available = registry.list_targets().join(", ");
        miette::miette!("unknown target '{}' (available: {})", cli.target, available)
    })?;

    let opts = BackendOptions::new(&cli.namespace, class_name);
    let output = backend
        .compile(&doc, &opts)
        .map_err(|e| miette::miette!("{e}"))
        .wrap_err("wrapper generation failed")?;

    // 5. Print diagnostics.
    for diag in &output.diagnostics {
        eprintln!("{diag}");
    }

    // 6. Dry-run: stop here.
    if cli.dry_run {
        log::info!("dry run: {output} not written");
        return Ok(());
    }

    // 7. Write output. Every file is fully generated at this point.
    std::fs::create_dir_all(&cli.output_dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to create {}", cli.output_dir.display()))?;
    for file in &output.files {
        let path = cli.output_dir.join(&file.name);
        log::info!("writing {}", path.display());
        std::fs::write(&path, &file.content)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    }

    log::info!("complete");
    Ok(())
}
