use super::{AnalysisDecision, ProjectId, Vulnerability};

/// VexEntry value object: one vulnerability record of a project-level VEX.
///
/// The affected target is always the project; components never appear
/// as targets.
#[derive(Debug, Clone, PartialEq)]
pub struct VexEntry {
    vulnerability: Vulnerability,
    analysis: Option<AnalysisDecision>,
    affected_project: ProjectId,
}

impl VexEntry {
    pub fn new(
        vulnerability: Vulnerability,
        analysis: Option<AnalysisDecision>,
        affected_project: ProjectId,
    ) -> Self {
        Self {
            vulnerability,
            analysis,
            affected_project,
        }
    }

    pub fn vulnerability(&self) -> &Vulnerability {
        &self.vulnerability
    }

    pub fn analysis(&self) -> Option<&AnalysisDecision> {
        self.analysis.as_ref()
    }

    pub fn affected_project(&self) -> ProjectId {
        self.affected_project
    }
}
