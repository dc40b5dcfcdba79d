use crate::shared::Result;
use crate::vex_generation::domain::{
    AnalysisDecision, ComponentId, Finding, Project, ProjectId, VulnerabilityKey,
};
use async_trait::async_trait;

/// VexRepository port for reading projects, dependency graphs and audit data
///
/// This port abstracts the external datastore. Implementations are expected
/// to serve reads from a snapshot that stays consistent for the duration of
/// one export or upload call.
///
/// # Async Support
/// All methods are async so the use cases can issue independent lookups
/// concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait VexRepository: Send + Sync {
    /// Resolves a project by identity
    ///
    /// # Returns
    /// `None` if no such project exists
    async fn resolve_project(&self, id: &ProjectId) -> Result<Option<Project>>;

    /// Looks a project up by name and optional version
    async fn find_project(&self, name: &str, version: Option<&str>) -> Result<Option<Project>>;

    /// Direct dependencies of a component, in recorded order
    ///
    /// Absent or empty references are already dropped. Unknown components
    /// have no dependencies.
    async fn direct_dependencies(&self, component: &ComponentId) -> Result<Vec<ComponentId>>;

    /// Findings recorded against a component
    async fn findings_of(&self, component: &ComponentId) -> Result<Vec<Finding>>;

    /// The analyst decision for a (component, vulnerability) pair, if any
    async fn analysis_decision_of(
        &self,
        component: &ComponentId,
        vulnerability: &VulnerabilityKey,
    ) -> Result<Option<AnalysisDecision>>;

    /// Tags currently assigned to a project
    async fn tags_of(&self, project: &ProjectId) -> Result<Vec<String>>;
}
