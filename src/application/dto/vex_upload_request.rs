use crate::vex_generation::domain::ProjectId;

/// How an upload names its target project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSelector {
    /// Project identity
    Id(ProjectId),
    /// Project name with an optional version
    NameVersion {
        name: String,
        version: Option<String>,
    },
}

impl std::fmt::Display for ProjectSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectSelector::Id(id) => write!(f, "{}", id),
            ProjectSelector::NameVersion {
                name,
                version: Some(version),
            } => write!(f, "{} {}", name, version),
            ProjectSelector::NameVersion {
                name,
                version: None,
            } => write!(f, "{}", name),
        }
    }
}

/// VexUploadRequest - Internal request DTO for the VEX upload use case
#[derive(Debug, Clone)]
pub struct VexUploadRequest {
    pub project: ProjectSelector,
    /// The document, Base64 encoded
    pub vex: String,
}

impl VexUploadRequest {
    pub fn new(project: ProjectSelector, vex: String) -> Self {
        Self { project, vex }
    }
}
