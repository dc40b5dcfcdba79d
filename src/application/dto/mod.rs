/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod problem_details;
mod vex_export_request;
mod vex_export_response;
mod vex_upload_request;
mod vex_upload_response;

pub use problem_details::ProblemDetails;
pub use vex_export_request::VexExportRequest;
pub use vex_export_response::VexExportResponse;
pub use vex_upload_request::{ProjectSelector, VexUploadRequest};
pub use vex_upload_response::VexUploadResponse;
