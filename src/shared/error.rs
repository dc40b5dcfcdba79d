use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Alternate ingestion path named in size-limit rejections.
pub const MULTIPART_UPLOAD_HINT: &str =
    "Please use the \"POST /api/v1/vex\" endpoint with Content-Type \"multipart/form-data\" instead.";

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a rejected document from
/// a broken invocation or an infrastructure failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - document exported or upload accepted
    Success = 0,
    /// The request was rejected (invalid version, oversized payload, schema violations, ...)
    DocumentRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (snapshot I/O, configuration, serialization, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    ///
    /// User-input errors map to `DocumentRejected`; everything else is an
    /// application error.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<VexError>() {
            Some(e) if e.is_user_error() => ExitCode::DocumentRejected,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DocumentRejected => write!(f, "Document Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the VEX export and upload pipelines.
///
/// The first six variants are caller errors and are surfaced verbatim
/// in problem-detail responses. The remaining ones describe local
/// infrastructure failures (snapshot files, output files, configuration).
#[derive(Debug, Error)]
pub enum VexError {
    #[error("Invalid CycloneDX version specified.")]
    InvalidVersion { requested: String },

    #[error(
        "The VEX is too large to be transmitted safely via Base64 encoded JSON value. {hint} \
         Original cause: String value length ({length}) exceeds the maximum allowed ({limit})",
        hint = MULTIPART_UPLOAD_HINT
    )]
    PayloadTooLarge { length: usize, limit: usize },

    #[error("VEX cannot be uploaded to collection project.")]
    CollectionProjectRejected { project: String },

    #[error("Schema validation failed ({} violation(s))", violations.len())]
    SchemaValidationFailed { violations: Vec<String> },

    #[error("The uploaded VEX could not be decoded: {details}")]
    MalformedPayload { details: String },

    #[error("{entity} could not be found: {reference}")]
    NotFound {
        entity: &'static str,
        reference: String,
    },

    #[error("Failed to read snapshot: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and contains a valid JSON snapshot")]
    SnapshotReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },
}

impl VexError {
    /// Whether the error was caused by the request rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            VexError::InvalidVersion { .. }
                | VexError::PayloadTooLarge { .. }
                | VexError::CollectionProjectRejected { .. }
                | VexError::SchemaValidationFailed { .. }
                | VexError::MalformedPayload { .. }
                | VexError::NotFound { .. }
        )
    }
}
