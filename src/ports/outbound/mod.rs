/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the datastore, the schema validator and the console.
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod schema_validator;
pub mod vex_repository;

pub use formatter::VexFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use schema_validator::SchemaValidator;
pub use vex_repository::VexRepository;
