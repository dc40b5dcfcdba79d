/// Validator adapters for uploaded documents
mod cyclonedx_schema_validator;

pub use cyclonedx_schema_validator::CycloneDxSchemaValidator;
