use crate::vex_generation::domain::ProjectId;

/// VexExportRequest - Internal request DTO for the VEX export use case
#[derive(Debug, Clone)]
pub struct VexExportRequest {
    /// The project the document is generated for
    pub project_id: ProjectId,
    /// Requested CycloneDX version; `None` or blank selects the default
    pub spec_version: Option<String>,
}

impl VexExportRequest {
    pub fn new(project_id: ProjectId, spec_version: Option<String>) -> Self {
        Self {
            project_id,
            spec_version,
        }
    }
}
