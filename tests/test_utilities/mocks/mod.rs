/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_schema_validator;
mod mock_vex_repository;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_schema_validator::MockSchemaValidator;
pub use mock_vex_repository::MockVexRepository;
