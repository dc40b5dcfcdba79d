use crate::shared::error::VexError;
use serde::Serialize;

const TITLE_BAD_REQUEST: &str = "Bad Request";
const TITLE_INVALID_BOM: &str = "The uploaded BOM is invalid";
const TITLE_UNMAPPABLE_PAYLOAD: &str = "The provided JSON payload could not be mapped";
const TITLE_NOT_FOUND: &str = "Not Found";
const TITLE_INTERNAL: &str = "Internal Server Error";

/// ProblemDetails - Machine-readable rejection body
///
/// Mirrors the problem-detail shape API clients receive: an HTTP-style
/// status, a short title, a human-readable detail and, for schema
/// failures, every violation found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    pub status: u16,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ProblemDetails {
    pub fn new(status: u16, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            detail: detail.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Maps any pipeline error to its problem-detail body
    ///
    /// Typed errors are recovered by downcasting; anything else is an
    /// internal failure.
    pub fn from_error(error: &anyhow::Error) -> Self {
        let Some(vex_error) = error.downcast_ref::<VexError>() else {
            return Self::new(500, TITLE_INTERNAL, format!("{:#}", error));
        };

        match vex_error {
            VexError::InvalidVersion { .. }
            | VexError::CollectionProjectRejected { .. }
            | VexError::MalformedPayload { .. } => {
                Self::new(400, TITLE_BAD_REQUEST, vex_error.to_string())
            }
            VexError::PayloadTooLarge { .. } => {
                Self::new(400, TITLE_UNMAPPABLE_PAYLOAD, vex_error.to_string())
            }
            VexError::SchemaValidationFailed { violations } => {
                Self::new(400, TITLE_INVALID_BOM, "Schema validation failed")
                    .with_errors(violations.clone())
            }
            VexError::NotFound { .. } => Self::new(404, TITLE_NOT_FOUND, vex_error.to_string()),
            VexError::SnapshotReadError { .. }
            | VexError::FileWriteError { .. }
            | VexError::ConfigError { .. } => {
                Self::new(500, TITLE_INTERNAL, vex_error.to_string())
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}
