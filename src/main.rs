mod cli;
mod config;

use cli::Args;
use config::ResolvedOptions;
use pod_graph::adapters::outbound::console::StderrProgressReporter;
use pod_graph::adapters::outbound::filesystem::FileSystemReader;
use pod_graph::application::dto::GraphRequest;
use pod_graph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pod_graph::application::use_cases::RenderGraphUseCase;
use pod_graph::ports::outbound::ProgressReporter;
use pod_graph::shared::error::{ExitCode, GraphError};
use pod_graph::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pod_graph=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<()> {
    let lockfile_path = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_lockfile_path(&lockfile_path)?;

    // Explicit config must exist; otherwise look next to the lockfile
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(&config_dir(&lockfile_path))?,
    };
    let options =
        ResolvedOptions::resolve(args.format, args.output, args.quiet, config_file.as_ref())?;

    let progress_reporter = if options.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Create use case with injected dependencies
    let use_case = RenderGraphUseCase::new(FileSystemReader::new(), &progress_reporter);
    let response = use_case.execute(GraphRequest::new(lockfile_path))?;

    progress_reporter.report(FormatterFactory::progress_message(options.format));

    let formatted_output = FormatterFactory::create(options.format).format(&response.graph)?;

    let presenter_type = PresenterType::from_output(options.output);
    PresenterFactory::create(presenter_type.clone()).present(&formatted_output)?;

    if let PresenterType::File(path) = presenter_type {
        progress_reporter
            .report_completion(&format!("✅ Output complete: {}", path.display()));
    }

    Ok(())
}

/// Directory searched for an auto-discovered config file
fn config_dir(lockfile_path: &Path) -> PathBuf {
    if lockfile_path.is_dir() {
        return lockfile_path.to_path_buf();
    }
    match lockfile_path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn validate_lockfile_path(path: &Path) -> Result<()> {
    let metadata = std::fs::symlink_metadata(path).map_err(|e| GraphError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: if path.exists() {
            format!("Failed to read path metadata: {}", e)
        } else {
            "Path does not exist".to_string()
        },
    })?;

    // Security check: Reject symbolic links for the lockfile or project directory
    if metadata.is_symlink() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    Ok(())
}
