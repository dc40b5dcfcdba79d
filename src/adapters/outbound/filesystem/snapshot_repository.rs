use super::FileSystemReader;
use crate::ports::outbound::VexRepository;
use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::domain::{
    AnalysisDecision, AnalysisJustification, AnalysisResponse, AnalysisState, CollectionLogic,
    Component, ComponentId, Finding, Project, ProjectId, Severity, Vulnerability,
    VulnerabilityKey,
};
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
    #[serde(default)]
    components: Vec<ComponentRecord>,
    #[serde(default)]
    vulnerabilities: Vec<VulnerabilityRecord>,
    #[serde(default)]
    findings: Vec<FindingRecord>,
    #[serde(default)]
    analyses: Vec<AnalysisRecord>,
}

/// One entry of a `directDependencies` array; `null` and missing uuids are skipped
#[derive(Debug, Deserialize)]
struct DependencyRef {
    #[serde(default)]
    uuid: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord {
    uuid: Uuid,
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    collection_logic: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    direct_dependencies: Vec<Option<DependencyRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentRecord {
    uuid: Uuid,
    project: Uuid,
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    direct_dependencies: Vec<Option<DependencyRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VulnerabilityRecord {
    uuid: Uuid,
    source: String,
    vuln_id: String,
    #[serde(default)]
    severity: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FindingRecord {
    component: Uuid,
    vulnerability: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisRecord {
    component: Uuid,
    vulnerability: Uuid,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    justification: Option<String>,
    #[serde(default)]
    response: Vec<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    suppressed: bool,
}

/// JsonSnapshotRepository adapter serving the VexRepository port from a JSON file
///
/// The snapshot is parsed once and indexed in memory, which gives every
/// export and upload call the consistent view the port requires.
/// Referential integrity is checked at load time: findings and analyses
/// must point at known components and vulnerabilities, and there is at
/// most one analysis per (component, vulnerability) pair.
#[derive(Debug, Default)]
pub struct JsonSnapshotRepository {
    projects: Vec<Project>,
    components: HashMap<ComponentId, Component>,
    findings: HashMap<ComponentId, Vec<Finding>>,
    decisions: HashMap<(ComponentId, VulnerabilityKey), AnalysisDecision>,
}

impl JsonSnapshotRepository {
    /// Loads a snapshot file
    ///
    /// # Errors
    /// Returns `VexError::SnapshotReadError` if the file cannot be read or
    /// does not describe a consistent snapshot
    pub fn load(path: &Path) -> Result<Self> {
        let repository = FileSystemReader::new()
            .read_to_string(path, "snapshot")
            .and_then(|content| Self::from_json(&content))
            .map_err(|e| VexError::SnapshotReadError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            })?;
        Ok(repository)
    }

    /// Builds the repository from snapshot JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(content).context("Failed to parse snapshot JSON")?;
        Self::index(snapshot)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    fn index(snapshot: Snapshot) -> Result<Self> {
        let projects = snapshot
            .projects
            .into_iter()
            .map(Self::build_project)
            .collect::<Result<Vec<_>>>()?;

        let mut components = HashMap::new();
        for record in snapshot.components {
            let component = Self::build_component(record)?;
            components.insert(component.id(), component);
        }
        Self::warn_dangling_references(&projects, &components);

        let mut vulnerabilities = HashMap::new();
        for record in snapshot.vulnerabilities {
            let vulnerability = Self::build_vulnerability(record)?;
            vulnerabilities.insert(*vulnerability.uuid(), vulnerability);
        }

        let mut findings: HashMap<ComponentId, Vec<Finding>> = HashMap::new();
        for record in snapshot.findings {
            let component = Self::known_component(&components, record.component)?;
            let vulnerability = Self::known_vulnerability(&vulnerabilities, record.vulnerability)?;
            findings
                .entry(component)
                .or_default()
                .push(Finding::new(component, vulnerability.clone()));
        }

        let mut decisions = HashMap::new();
        for record in snapshot.analyses {
            let component = Self::known_component(&components, record.component)?;
            let key = Self::known_vulnerability(&vulnerabilities, record.vulnerability)?
                .key()
                .clone();
            let decision = Self::build_decision(&record)?;
            if decisions.insert((component, key.clone()), decision).is_some() {
                anyhow::bail!(
                    "Duplicate analysis for component {} and vulnerability {}",
                    component,
                    key
                );
            }
        }

        tracing::debug!(
            projects = projects.len(),
            components = components.len(),
            vulnerabilities = vulnerabilities.len(),
            "snapshot indexed"
        );

        Ok(Self {
            projects,
            components,
            findings,
            decisions,
        })
    }

    fn build_project(record: ProjectRecord) -> Result<Project> {
        let collection_logic = match record.collection_logic.as_deref() {
            Some(value) => CollectionLogic::parse_optional(value)?,
            None => None,
        };
        let project = Project::new(ProjectId::new(record.uuid), record.name, record.version)
            .with_context(|| format!("Invalid project {}", record.uuid))?
            .with_collection_logic(collection_logic)
            .with_tags(record.tags)
            .with_direct_dependencies(Self::dependency_ids(record.direct_dependencies)?);
        Ok(project)
    }

    fn build_component(record: ComponentRecord) -> Result<Component> {
        Ok(Component::new(
            ComponentId::new(record.uuid),
            ProjectId::new(record.project),
            record.name,
            record.version,
            Self::dependency_ids(record.direct_dependencies)?,
        ))
    }

    fn build_vulnerability(record: VulnerabilityRecord) -> Result<Vulnerability> {
        let key = VulnerabilityKey::new(record.source, record.vuln_id)
            .with_context(|| format!("Invalid vulnerability {}", record.uuid))?;
        let severity = match record.severity.as_deref() {
            Some(value) => value.parse()?,
            None => Severity::Unassigned,
        };
        Ok(Vulnerability::new(record.uuid, key, severity))
    }

    fn build_decision(record: &AnalysisRecord) -> Result<AnalysisDecision> {
        let state = match record.state.as_deref() {
            Some(value) => value.parse()?,
            None => AnalysisState::NotSet,
        };
        let justification = record
            .justification
            .as_deref()
            .map(str::parse::<AnalysisJustification>)
            .transpose()?;
        let responses = record
            .response
            .iter()
            .map(|r| r.parse::<AnalysisResponse>())
            .collect::<Result<Vec<_>>>()?;

        Ok(AnalysisDecision::new(state)
            .with_justification(justification)
            .with_responses(responses)
            .with_detail(record.details.clone())
            .suppressed(record.suppressed))
    }

    /// Resolves a `directDependencies` array, skipping absent and empty references
    fn dependency_ids(references: Vec<Option<DependencyRef>>) -> Result<Vec<ComponentId>> {
        references
            .into_iter()
            .flatten()
            .filter_map(|r| r.uuid)
            .filter(|uuid| !uuid.trim().is_empty())
            .map(|uuid| uuid.parse::<ComponentId>())
            .collect()
    }

    fn warn_dangling_references(
        projects: &[Project],
        components: &HashMap<ComponentId, Component>,
    ) {
        let references = projects
            .iter()
            .flat_map(|p| p.direct_dependencies())
            .chain(components.values().flat_map(|c| c.direct_dependencies()));
        for reference in references {
            if !components.contains_key(reference) {
                tracing::warn!(component = %reference, "dependency reference to unknown component");
            }
        }
    }

    fn known_component(
        components: &HashMap<ComponentId, Component>,
        uuid: Uuid,
    ) -> Result<ComponentId> {
        let id = ComponentId::new(uuid);
        if !components.contains_key(&id) {
            anyhow::bail!("Reference to unknown component {}", uuid);
        }
        Ok(id)
    }

    fn known_vulnerability(
        vulnerabilities: &HashMap<Uuid, Vulnerability>,
        uuid: Uuid,
    ) -> Result<&Vulnerability> {
        vulnerabilities
            .get(&uuid)
            .ok_or_else(|| anyhow::anyhow!("Reference to unknown vulnerability {}", uuid))
    }
}

#[async_trait]
impl VexRepository for JsonSnapshotRepository {
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
        Ok(self
            .components
            .get(component)
            .map(|c| c.direct_dependencies().to_vec())
            .unwrap_or_default())
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

    async fn tags_of(&self, project: &ProjectId) -> Result<Vec<String>> {
        Ok(self
            .projects
            .iter()
            .find(|p| p.id() == *project)
            .map(|p| p.tags().to_vec())
            .unwrap_or_default())
    }
}
