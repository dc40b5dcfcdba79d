use crate::application::dto::{VexExportRequest, VexExportResponse};
use crate::application::read_models::VexDocumentBuilder;
use crate::ports::outbound::{ProgressReporter, VexRepository};
use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::domain::{
    AuditedFinding, ComponentId, Finding, Project, ProjectId, SpecVersion,
};
use crate::vex_generation::services::{
    DependencyGraphCollector, VexMetadataGenerator, VulnerabilityRollup,
};
use futures::future::try_join_all;

/// ExportVexUseCase - Core use case for project-level VEX generation
///
/// This use case orchestrates the export workflow using generic
/// dependency injection for the datastore and progress reporting.
///
/// Each call reads one consistent view of the datastore and keeps no
/// state between calls. Independent lookups are issued concurrently;
/// `try_join_all` preserves input order, so output stays deterministic.
///
/// # Type Parameters
/// * `R` - VexRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportVexUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> ExportVexUseCase<R, PR>
where
    R: VexRepository,
    PR: ProgressReporter,
{
    /// Creates a new ExportVexUseCase with injected dependencies
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    /// Executes the VEX export use case
    ///
    /// # Arguments
    /// * `request` - Export request naming the project and output version
    ///
    /// # Returns
    /// VexExportResponse carrying the serialization-ready document
    ///
    /// # Errors
    /// * `VexError::InvalidVersion` - the requested version is not supported
    /// * `VexError::NotFound` - the project does not exist
    /// * any datastore error
    pub async fn execute(&self, request: VexExportRequest) -> Result<VexExportResponse> {
        // Step 1: Resolve the output version before touching the datastore
        let spec_version = SpecVersion::resolve(request.spec_version.as_deref())?;

        // Step 2: Resolve the subject project
        let project = self.resolve_project(&request.project_id).await?;

        // Step 3: Collect direct and transitive components
        let components = self.collect_components(&project).await?;

        // Step 4: Pair every finding with its analyst decision
        let audited = self.audit_findings(&components).await?;
        let finding_count = audited.len();

        // Step 5: Roll findings up to the project level
        let entries = VulnerabilityRollup::rollup(project.id(), audited);
        self.progress_reporter.report(&format!(
            "🛡️  Rolled {} finding(s) up into {} VEX entr{}",
            finding_count,
            entries.len(),
            if entries.len() == 1 { "y" } else { "ies" }
        ));

        // Step 6: Build the document
        let metadata = VexMetadataGenerator::generate_default_metadata();
        let document = VexDocumentBuilder::build(spec_version, &project, &metadata, &entries);

        Ok(VexExportResponse::new(
            document,
            components.len(),
            finding_count,
        ))
    }

    async fn resolve_project(&self, id: &ProjectId) -> Result<Project> {
        self.progress_reporter
            .report(&format!("📖 Resolving project: {}", id));

        let project = self
            .repository
            .resolve_project(id)
            .await?
            .ok_or_else(|| VexError::NotFound {
                entity: "Project",
                reference: id.to_string(),
            })?;

        tracing::debug!(project = %project.label(), "resolved export subject");
        Ok(project)
    }

    /// Breadth-first traversal, one concurrent datastore round per layer
    async fn collect_components(&self, project: &Project) -> Result<Vec<ComponentId>> {
        self.progress_reporter.report(&format!(
            "🔗 Traversing dependency graph from {} direct dependenc{}",
            project.direct_dependencies().len(),
            if project.direct_dependencies().len() == 1 { "y" } else { "ies" }
        ));

        let mut collector = DependencyGraphCollector::new(project.direct_dependencies());
        while !collector.is_complete() {
            let edges = try_join_all(
                collector
                    .frontier()
                    .iter()
                    .map(|component| self.repository.direct_dependencies(component)),
            )
            .await?;
            collector.advance(edges)?;

            tracing::debug!(
                depth = collector.depth(),
                discovered = collector.discovered_count(),
                "dependency layer resolved"
            );
            self.progress_reporter.report_progress(
                collector.discovered_count() - collector.frontier().len(),
                collector.discovered_count(),
                Some("components"),
            );
        }

        let components = collector.into_reachable();
        self.progress_reporter.report(&format!(
            "✅ Found {} reachable component(s)",
            components.len()
        ));
        Ok(components)
    }

    async fn audit_findings(&self, components: &[ComponentId]) -> Result<Vec<AuditedFinding>> {
        let per_component = try_join_all(
            components
                .iter()
                .map(|component| self.repository.findings_of(component)),
        )
        .await?;
        let findings: Vec<Finding> = per_component.into_iter().flatten().collect();

        let decisions = try_join_all(findings.iter().map(|finding| async move {
            let component = finding.component();
            self.repository
                .analysis_decision_of(&component, finding.vulnerability().key())
                .await
        }))
        .await?;

        Ok(findings
            .into_iter()
            .zip(decisions)
            .map(|(finding, decision)| finding.audited(decision))
            .collect())
    }
}

#[cfg(test)]
mod tests;
