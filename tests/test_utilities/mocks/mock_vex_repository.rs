use async_trait::async_trait;
use project_vex::prelude::*;
use std::collections::HashMap;

/// Mock VexRepository backed by in-memory maps
#[derive(Default)]
pub struct MockVexRepository {
    projects: Vec<Project>,
    edges: HashMap<ComponentId, Vec<ComponentId>>,
    findings: HashMap<ComponentId, Vec<Finding>>,
    decisions: HashMap<(ComponentId, VulnerabilityKey), AnalysisDecision>,
    pub should_fail: bool,
}

impl MockVexRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    pub fn with_dependency(mut self, from: ComponentId, to: ComponentId) -> Self {
        self.edges.entry(from).or_default().push(to);
        self
    }

    pub fn with_finding(mut self, component: ComponentId, vulnerability: &Vulnerability) -> Self {
        self.findings
            .entry(component)
            .or_default()
            .push(Finding::new(component, vulnerability.clone()));
        self
    }

    pub fn with_decision(
        mut self,
        component: ComponentId,
        vulnerability: &Vulnerability,
        decision: AnalysisDecision,
    ) -> Self {
        self.decisions
            .insert((component, vulnerability.key().clone()), decision);
        self
    }

    fn check(&self) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock datastore failure");
        }
        Ok(())
    }
}

#[async_trait]
impl VexRepository for MockVexRepository {
    async fn resolve_project(&self, id: &ProjectId) -> Result<Option<Project>> {
        self.check()?;
        Ok(self.projects.iter().find(|p| p.id() == *id).cloned())
    }

    async fn find_project(&self, name: &str, version: Option<&str>) -> Result<Option<Project>> {
        self.check()?;
        Ok(self
            .projects
            .iter()
            .find(|p| p.name() == name && p.version() == version)
            .cloned())
    }

    async fn direct_dependencies(&self, component: &ComponentId) -> Result<Vec<ComponentId>> {
        self.check()?;
        Ok(self.edges.get(component).cloned().unwrap_or_default())
    }

    async fn findings_of(&self, component: &ComponentId) -> Result<Vec<Finding>> {
        self.check()?;
        Ok(self.findings.get(component).cloned().unwrap_or_default())
    }

    async fn analysis_decision_of(
        &self,
        component: &ComponentId,
        vulnerability: &VulnerabilityKey,
    ) -> Result<Option<AnalysisDecision>> {
        self.check()?;
        Ok(self
            .decisions
            .get(&(*component, vulnerability.clone()))
            .cloned())
    }

    async fn tags_of(&self, project: &ProjectId) -> Result<Vec<String>> {
        self.check()?;
        Ok(self
            .projects
            .iter()
            .find(|p| p.id() == *project)
            .map(|p| p.tags().to_vec())
            .unwrap_or_default())
    }
}
