use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::ProjectSelector;
use crate::vex_generation::domain::ProjectId;

/// Export project-level CycloneDX VEX documents and gate VEX/BOM uploads
#[derive(Parser, Debug)]
#[command(name = "project-vex")]
#[command(version)]
#[command(
    about = "Export project-level CycloneDX VEX documents and gate VEX/BOM uploads",
    long_about = None
)]
pub struct Args {
    /// Diagnostic log level (error, warn, info, debug, trace); overrides PROJECT_VEX_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a CycloneDX VEX document for a project
    Export(ExportArgs),
    /// Check a VEX document the way the upload endpoint does
    Upload(UploadArgs),
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Datastore snapshot (JSON)
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Project UUID
    #[arg(short, long, value_name = "UUID")]
    pub project: ProjectId,

    /// CycloneDX version of the output: 1.4, 1.5 or 1.6 (defaults to 1.5)
    #[arg(long, value_name = "VERSION")]
    pub spec_version: Option<String>,

    /// Output file path; `-` or no value writes the document to stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct UploadArgs {
    /// Datastore snapshot (JSON)
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Project UUID
    #[arg(
        short,
        long,
        value_name = "UUID",
        conflicts_with = "project_name",
        required_unless_present = "project_name"
    )]
    pub project: Option<ProjectId>,

    /// Project name, as an alternative to the UUID
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Project version, used together with --project-name
    #[arg(long, value_name = "VERSION", requires = "project_name")]
    pub project_version: Option<String>,

    /// VEX document to upload (JSON or XML); it is Base64-encoded before submission
    #[arg(long, value_name = "FILE")]
    pub vex: PathBuf,

    /// Configuration file (defaults to project-vex.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl UploadArgs {
    /// The target project as the upload request names it
    pub fn project_selector(&self) -> ProjectSelector {
        match (&self.project, &self.project_name) {
            (Some(id), _) => ProjectSelector::Id(*id),
            (None, name) => ProjectSelector::NameVersion {
                name: name.clone().unwrap_or_default(),
                version: self.project_version.clone(),
            },
        }
    }
}
