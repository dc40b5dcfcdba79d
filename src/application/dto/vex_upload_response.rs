use crate::vex_generation::domain::{DocumentFormat, ProjectId};
use serde::Serialize;
use uuid::Uuid;

/// VexUploadResponse - Acceptance of an uploaded document
///
/// The token identifies the queued processing event; processing itself
/// happens outside this crate.
#[derive(Debug, Clone, Serialize)]
pub struct VexUploadResponse {
    pub token: Uuid,
    #[serde(rename = "project")]
    pub project_id: Uuid,
    /// Size of the decoded document in bytes
    #[serde(rename = "size")]
    pub decoded_size: usize,
    pub format: String,
    /// Whether schema validation ran for this upload
    pub validated: bool,
}

impl VexUploadResponse {
    pub fn new(
        project_id: ProjectId,
        decoded_size: usize,
        format: DocumentFormat,
        validated: bool,
    ) -> Self {
        Self {
            token: Uuid::new_v4(),
            project_id: *project_id.as_uuid(),
            decoded_size,
            format: format.as_str().to_string(),
            validated,
        }
    }
}
