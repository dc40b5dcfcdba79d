pub mod analysis;
pub mod component;
pub mod document_format;
pub mod finding;
pub mod project;
pub mod spec_version;
pub mod vex_entry;
pub mod vex_metadata;
pub mod vulnerability;

pub use analysis::{AnalysisDecision, AnalysisJustification, AnalysisResponse, AnalysisState};
pub use component::{Component, ComponentId};
pub use document_format::DocumentFormat;
pub use finding::{AuditedFinding, Finding};
pub use project::{CollectionLogic, Project, ProjectId};
pub use spec_version::SpecVersion;
pub use vex_entry::VexEntry;
pub use vex_metadata::VexMetadata;
pub use vulnerability::{Severity, Vulnerability, VulnerabilityKey};
