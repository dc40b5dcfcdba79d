//! project-vex - project-level CycloneDX VEX export and VEX/BOM upload gate
//!
//! This library produces a single CycloneDX VEX document for a project by
//! walking its transitive dependency graph and rolling up vulnerability
//! findings and analysis decisions. It also implements the checks an
//! uploaded VEX or BOM document has to pass before it is accepted.
//! The code follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`vex_generation`): Pure business logic for graph traversal, rollup
//!   and upload policies
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use project_vex::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let repository = JsonSnapshotRepository::load(Path::new("snapshot.json"))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ExportVexUseCase::new(repository, progress_reporter);
//!
//! // Execute
//! let project: ProjectId = "11111111-1111-4111-8111-111111111111".parse()?;
//! let request = VexExportRequest::new(project, Some("1.5".to_string()));
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = CycloneDxFormatter::new();
//! let output = formatter.format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod vex_generation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, JsonSnapshotRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::validators::CycloneDxSchemaValidator;
    pub use crate::application::dto::{
        ProblemDetails, ProjectSelector, VexExportRequest, VexExportResponse, VexUploadRequest,
        VexUploadResponse,
    };
    pub use crate::application::read_models::VexReadModel;
    pub use crate::application::use_cases::{ExportVexUseCase, UploadSettings, UploadVexUseCase};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, SchemaValidator, VexFormatter, VexRepository,
    };
    pub use crate::vex_generation::domain::{
        AnalysisDecision, AnalysisJustification, AnalysisResponse, AnalysisState, Component,
        ComponentId, DocumentFormat, Finding, Project, ProjectId, Severity, SpecVersion, VexEntry,
        Vulnerability, VulnerabilityKey,
    };
    pub use crate::vex_generation::policies::{
        CollectionProjectGuard, UploadSizeGuard, ValidationMode, ValidationPolicy,
    };
    pub use crate::vex_generation::services::{
        DependencyGraphCollector, VexMetadataGenerator, VulnerabilityRollup,
    };
    pub use crate::shared::Result;
}
