use super::*;
use crate::vex_generation::domain::{
    AnalysisDecision, AnalysisResponse, AnalysisState, Severity, Vulnerability, VulnerabilityKey,
};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

// Mock implementations for testing
#[derive(Default)]
struct InMemoryRepository {
    projects: Vec<Project>,
    edges: HashMap<ComponentId, Vec<ComponentId>>,
    findings: HashMap<ComponentId, Vec<Finding>>,
    decisions: HashMap<(ComponentId, VulnerabilityKey), AnalysisDecision>,
}

impl InMemoryRepository {
    fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    fn with_edge(mut self, from: ComponentId, to: ComponentId) -> Self {
        self.edges.entry(from).or_default().push(to);
        self
    }

    fn with_finding(mut self, component: ComponentId, vulnerability: &Vulnerability) -> Self {
        self.findings
            .entry(component)
            .or_default()
            .push(Finding::new(component, vulnerability.clone()));
        self
    }

    fn with_decision(
        mut self,
        component: ComponentId,
        vulnerability: &Vulnerability,
        decision: AnalysisDecision,
    ) -> Self {
        self.decisions
            .insert((component, vulnerability.key().clone()), decision);
        self
    }
}

#[async_trait]
impl VexRepository for InMemoryRepository {
    async fn resolve_project(&self, id: &ProjectId) -> Result<Option<Project>> {
        Ok(self.projects.iter().find(|p| p.id() == *id).cloned())
    }

    async fn find_project(&self, name: &str, version: Option<&str>) -> Result<Option<Project>> {
        Ok(self
            .projects
            .iter()
            .find(|p| p.name() == name && p.version() == version)
            .cloned())
    }

    async fn direct_dependencies(&self, component: &ComponentId) -> Result<Vec<ComponentId>> {
        Ok(self.edges.get(component).cloned().unwrap_or_default())
    }

    async fn findings_of(&self, component: &ComponentId) -> Result<Vec<Finding>> {
        Ok(self.findings.get(component).cloned().unwrap_or_default())
    }

    async fn analysis_decision_of(
        &self,
        component: &ComponentId,
        vulnerability: &VulnerabilityKey,
    ) -> Result<Option<AnalysisDecision>> {
        Ok(self
            .decisions
            .get(&(*component, vulnerability.clone()))
            .cloned())
    }

    async fn tags_of(&self, _project: &ProjectId) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
struct RecordingProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_warning(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn component() -> ComponentId {
    ComponentId::new(Uuid::new_v4())
}

fn project(direct: Vec<ComponentId>) -> Project {
    Project::new(
        ProjectId::new(Uuid::new_v4()),
        "Acme Example".to_string(),
        Some("1.0".to_string()),
    )
    .unwrap()
    .with_direct_dependencies(direct)
}

fn internal_vulnerability(id: &str) -> Vulnerability {
    Vulnerability::new(
        Uuid::new_v4(),
        VulnerabilityKey::new("INTERNAL".to_string(), id.to_string()).unwrap(),
        Severity::Medium,
    )
}

fn use_case(
    repository: InMemoryRepository,
) -> ExportVexUseCase<InMemoryRepository, RecordingProgressReporter> {
    ExportVexUseCase::new(repository, RecordingProgressReporter::default())
}

#[tokio::test]
async fn test_identical_decisions_on_two_components_collapse() {
    let (c1, c2) = (component(), component());
    let project = project(vec![c1, c2]);
    let vuln = internal_vulnerability("INT-001");
    let decision = AnalysisDecision::new(AnalysisState::Resolved)
        .with_responses(vec![AnalysisResponse::Update])
        .suppressed(true);
    let repository = InMemoryRepository::default()
        .with_project(project.clone())
        .with_finding(c1, &vuln)
        .with_finding(c2, &vuln)
        .with_decision(c1, &vuln, decision.clone())
        .with_decision(c2, &vuln, decision);

    let response = use_case(repository)
        .execute(VexExportRequest::new(project.id(), None))
        .await
        .unwrap();

    assert_eq!(response.component_count, 2);
    assert_eq!(response.finding_count, 2);
    assert_eq!(response.entry_count(), 1);
    let entry = &response.document.vulnerabilities[0];
    assert_eq!(entry.id, "INT-001");
    assert_eq!(
        entry.analysis.as_ref().and_then(|a| a.state.as_deref()),
        Some("resolved")
    );
    assert_eq!(entry.affects, vec![project.id().bom_ref()]);
}

#[tokio::test]
async fn test_differing_decisions_produce_separate_entries() {
    let (c1, c2) = (component(), component());
    let project = project(vec![c1, c2]);
    let vuln = internal_vulnerability("INT-001");
    let repository = InMemoryRepository::default()
        .with_project(project.clone())
        .with_finding(c1, &vuln)
        .with_finding(c2, &vuln)
        .with_decision(c1, &vuln, AnalysisDecision::new(AnalysisState::InTriage))
        .with_decision(c2, &vuln, AnalysisDecision::new(AnalysisState::Exploitable));

    let response = use_case(repository)
        .execute(VexExportRequest::new(project.id(), Some("1.6".to_string())))
        .await
        .unwrap();

    let states: Vec<_> = response
        .document
        .vulnerabilities
        .iter()
        .map(|v| v.analysis.as_ref().and_then(|a| a.state.clone()))
        .collect();
    assert_eq!(
        states,
        vec![Some("in_triage".to_string()), Some("exploitable".to_string())]
    );
    assert!(response
        .document
        .vulnerabilities
        .iter()
        .all(|v| v.id == "INT-001" && v.source == "INTERNAL"));
    assert_eq!(response.document.spec_version, SpecVersion::V1_6);
}

#[tokio::test]
async fn test_transitive_findings_are_included() {
    let (direct, transitive) = (component(), component());
    let project = project(vec![direct]);
    let vuln = internal_vulnerability("INT-002");
    let repository = InMemoryRepository::default()
        .with_project(project.clone())
        .with_edge(direct, transitive)
        .with_edge(transitive, direct)
        .with_finding(transitive, &vuln);

    let response = use_case(repository)
        .execute(VexExportRequest::new(project.id(), None))
        .await
        .unwrap();

    assert_eq!(response.component_count, 2);
    assert_eq!(response.entry_count(), 1);
    assert!(response.document.vulnerabilities[0].analysis.is_none());
}

#[tokio::test]
async fn test_project_without_dependencies() {
    let project = project(Vec::new());
    let repository = InMemoryRepository::default().with_project(project.clone());

    let response = use_case(repository)
        .execute(VexExportRequest::new(project.id(), Some(String::new())))
        .await
        .unwrap();

    assert_eq!(response.component_count, 0);
    assert_eq!(response.document.spec_version, SpecVersion::V1_5);
    assert!(response.document.vulnerabilities.is_empty());
}

#[tokio::test]
async fn test_unknown_project_is_not_found() {
    let error = use_case(InMemoryRepository::default())
        .execute(VexExportRequest::new(ProjectId::new(Uuid::new_v4()), None))
        .await
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<VexError>(),
        Some(VexError::NotFound {
            entity: "Project",
            ..
        })
    ));
}

#[tokio::test]
async fn test_invalid_version_rejected_before_lookup() {
    let use_case = use_case(InMemoryRepository::default());

    let error = use_case
        .execute(VexExportRequest::new(
            ProjectId::new(Uuid::new_v4()),
            Some("1.9".to_string()),
        ))
        .await
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<VexError>(),
        Some(VexError::InvalidVersion { .. })
    ));
    assert!(use_case.progress_reporter.messages.borrow().is_empty());
}
