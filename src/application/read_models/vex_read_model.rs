//! VEX read model
//!
//! Denormalized, serialization-ready view of one project-level VEX
//! document. Formatters consume it without touching domain objects.

use crate::vex_generation::domain::SpecVersion;

/// Main read model for a VEX document
#[derive(Debug, Clone)]
pub struct VexReadModel {
    /// Resolved output version; selects the serialization shape
    pub spec_version: SpecVersion,
    /// Document metadata
    pub metadata: VexMetadataView,
    /// The project the document is about
    pub subject: SubjectView,
    /// One record per rolled-up VEX entry, in rollup order
    pub vulnerabilities: Vec<VulnerabilityView>,
}

/// View representation of document metadata
#[derive(Debug, Clone)]
pub struct VexMetadataView {
    pub timestamp: String,
    pub serial_number: String,
    pub tool_vendor: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// View representation of the subject (the project as an application component)
#[derive(Debug, Clone)]
pub struct SubjectView {
    pub bom_ref: String,
    pub name: String,
    pub version: Option<String>,
}

/// View representation of one vulnerability record
#[derive(Debug, Clone)]
pub struct VulnerabilityView {
    pub bom_ref: String,
    pub id: String,
    pub source: String,
    /// CycloneDX rating severity (lowercase)
    pub severity: String,
    /// Present if and only if the entry carries a decision
    pub analysis: Option<AnalysisView>,
    /// References of affected targets; always exactly the subject
    pub affects: Vec<String>,
}

/// View representation of an analyst decision
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub state: Option<String>,
    pub justification: Option<String>,
    pub responses: Vec<String>,
    pub detail: Option<String>,
}
