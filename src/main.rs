use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Parser;
use owo_colors::OwoColorize;
use project_vex::adapters::outbound::console::StderrProgressReporter;
use project_vex::adapters::outbound::filesystem::{
    FileSystemReader, JsonSnapshotRepository, StdoutPresenter,
};
use project_vex::adapters::outbound::formatters::CycloneDxFormatter;
use project_vex::adapters::outbound::validators::CycloneDxSchemaValidator;
use project_vex::application::dto::{ProblemDetails, VexExportRequest, VexUploadRequest};
use project_vex::application::factories::{PresenterFactory, PresenterType};
use project_vex::application::use_cases::{ExportVexUseCase, UploadVexUseCase};
use project_vex::cli::{Args, Command, ExportArgs, UploadArgs};
use project_vex::config::{self, ConfigFile};
use project_vex::ports::outbound::{OutputPresenter, ProgressReporter, VexFormatter};
use project_vex::shared::error::{ExitCode, VexError};
use project_vex::shared::Result;
use std::process;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "PROJECT_VEX_LOG";

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments.as_i32()
            } else {
                ExitCode::Success.as_i32()
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_tracing(args.log_level.as_deref());

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("❌ Failed to start async runtime: {}", e);
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    };

    if let Err(e) = runtime.block_on(run(args)) {
        let exit_code = ExitCode::for_error(&e);
        if exit_code == ExitCode::DocumentRejected {
            present_problem(&e);
        }
        print_error(&e);
        process::exit(exit_code.as_i32());
    }
}

/// Diagnostics go to stderr; stdout carries documents and problem details only
fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    tracing::debug!(command = ?args.command, "starting");

    match args.command {
        Command::Export(export) => run_export(export, args.quiet).await,
        Command::Upload(upload) => run_upload(upload, args.quiet).await,
    }
}

fn progress_reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

async fn run_export(args: ExportArgs, quiet: bool) -> Result<()> {
    let repository = JsonSnapshotRepository::load(&args.snapshot)?;

    let use_case = ExportVexUseCase::new(repository, progress_reporter(quiet));
    let request = VexExportRequest::new(args.project, args.spec_version);
    let response = use_case.execute(request).await?;

    eprintln_unless(quiet, "📝 Generating CycloneDX VEX JSON output...");
    let output = CycloneDxFormatter::new().format(&response.document)?;
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&output)?;

    progress_reporter(quiet).report_completion(&format!(
        "✅ VEX with {} vulnerability record(s) across {} component(s) complete",
        response.entry_count(),
        response.component_count
    ));
    Ok(())
}

fn eprintln_unless(quiet: bool, message: &str) {
    if !quiet {
        eprintln!("{}", message);
    }
}

async fn run_upload(args: UploadArgs, quiet: bool) -> Result<()> {
    let config = load_config(&args)?;
    let settings = config.upload_settings()?;

    let repository = JsonSnapshotRepository::load(&args.snapshot)?;
    let document = FileSystemReader::new().read_bytes(&args.vex, "VEX document")?;

    let request = VexUploadRequest::new(args.project_selector(), STANDARD.encode(&document));
    let use_case = UploadVexUseCase::new(
        repository,
        CycloneDxSchemaValidator::new()?,
        progress_reporter(quiet),
        settings,
    );
    let response = use_case.execute(request).await?;

    let output = serde_json::to_string_pretty(&response)?;
    StdoutPresenter::new().present(&output)?;

    progress_reporter(quiet).report_completion(&format!(
        "✅ VEX accepted for processing (token {})",
        response.token
    ));
    Ok(())
}

fn load_config(args: &UploadArgs) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().map_err(|e| VexError::ConfigError {
                message: format!("Failed to determine current directory: {}", e),
            })?;
            config::discover_config(&cwd)?
        }
    };
    Ok(config.unwrap_or_default())
}

fn present_problem(error: &anyhow::Error) {
    let problem = ProblemDetails::from_error(error);
    match serde_json::to_string_pretty(&problem) {
        Ok(json) => {
            if let Err(e) = StdoutPresenter::new().present(&json) {
                tracing::warn!(error = %e, "failed to print problem details");
            }
        }
        Err(e) => tracing::warn!(error = %e, "failed to serialize problem details"),
    }
}

fn print_error(error: &anyhow::Error) {
    eprintln!("\n{} {}\n", "❌".red(), "An error occurred:".red().bold());
    eprintln!("{}", error);

    // Display error chain
    for cause in error.chain().skip(1) {
        eprintln!("\n{} {}", "Caused by:".yellow(), cause);
    }

    eprintln!();
}
