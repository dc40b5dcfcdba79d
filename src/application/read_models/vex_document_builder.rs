//! Builder for constructing VexReadModel from domain objects

use super::vex_read_model::{
    AnalysisView, SubjectView, VexMetadataView, VexReadModel, VulnerabilityView,
};
use crate::vex_generation::domain::{
    AnalysisDecision, Project, SpecVersion, VexEntry, VexMetadata,
};

/// VexDocumentBuilder turns a rollup into a versioned document structure
///
/// Pure transformation: the project becomes the document subject (its UUID
/// is the subject `bom-ref`), each VexEntry becomes one vulnerability record
/// affecting the subject.
pub struct VexDocumentBuilder;

impl VexDocumentBuilder {
    /// Builds a VexReadModel
    ///
    /// # Arguments
    /// * `spec_version` - Resolved output version
    /// * `project` - The document subject
    /// * `metadata` - Timestamp, serial number and tool descriptor
    /// * `entries` - Rolled-up entries, in output order
    pub fn build(
        spec_version: SpecVersion,
        project: &Project,
        metadata: &VexMetadata,
        entries: &[VexEntry],
    ) -> VexReadModel {
        let subject = Self::build_subject(project);
        let vulnerabilities = if spec_version.supports_vulnerabilities() {
            entries.iter().map(Self::build_vulnerability).collect()
        } else {
            Vec::new()
        };

        VexReadModel {
            spec_version,
            metadata: Self::build_metadata(metadata),
            subject,
            vulnerabilities,
        }
    }

    fn build_metadata(metadata: &VexMetadata) -> VexMetadataView {
        VexMetadataView {
            timestamp: metadata.timestamp().to_string(),
            serial_number: metadata.serial_number().to_string(),
            tool_vendor: metadata.tool_vendor().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    fn build_subject(project: &Project) -> SubjectView {
        SubjectView {
            bom_ref: project.id().bom_ref(),
            name: project.name().to_string(),
            version: project.version().map(str::to_string),
        }
    }

    fn build_vulnerability(entry: &VexEntry) -> VulnerabilityView {
        let vulnerability = entry.vulnerability();
        VulnerabilityView {
            bom_ref: vulnerability.bom_ref(),
            id: vulnerability.key().vuln_id().to_string(),
            source: vulnerability.key().source().to_string(),
            severity: vulnerability.severity().as_cyclonedx().to_string(),
            analysis: entry.analysis().map(Self::build_analysis),
            affects: vec![entry.affected_project().bom_ref()],
        }
    }

    /// NOT_SET values have no CycloneDX counterpart and are dropped
    fn build_analysis(decision: &AnalysisDecision) -> AnalysisView {
        AnalysisView {
            state: decision.state().as_cyclonedx().map(str::to_string),
            justification: decision
                .justification()
                .and_then(|j| j.as_cyclonedx())
                .map(str::to_string),
            responses: decision
                .responses()
                .iter()
                .filter_map(|r| r.as_cyclonedx())
                .map(str::to_string)
                .collect(),
            detail: decision
                .detail()
                .filter(|d| !d.trim().is_empty())
                .map(str::to_string),
        }
    }
}
