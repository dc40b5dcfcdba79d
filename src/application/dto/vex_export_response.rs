use crate::application::read_models::VexReadModel;

/// VexExportResponse - Internal response DTO from the VEX export use case
#[derive(Debug, Clone)]
pub struct VexExportResponse {
    /// Serialization-ready document
    pub document: VexReadModel,
    /// Number of distinct components reachable from the project
    pub component_count: usize,
    /// Number of findings inspected before the rollup
    pub finding_count: usize,
}

impl VexExportResponse {
    pub fn new(document: VexReadModel, component_count: usize, finding_count: usize) -> Self {
        Self {
            document,
            component_count,
            finding_count,
        }
    }

    /// Number of vulnerability records in the document
    pub fn entry_count(&self) -> usize {
        self.document.vulnerabilities.len()
    }
}
