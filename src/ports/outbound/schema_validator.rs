use crate::vex_generation::domain::DocumentFormat;

/// SchemaValidator port for checking uploaded documents
///
/// One implementation per format family can be plugged in; the upload use
/// case only depends on this capability.
pub trait SchemaValidator: Send + Sync {
    /// Validates a raw document
    ///
    /// # Arguments
    /// * `document` - The decoded document bytes
    /// * `format` - The detected serialization format
    /// * `spec_version` - The version the document declares, if any
    ///
    /// # Returns
    /// Every violation found. An empty list means the document is accepted.
    /// Implementations must collect all violations rather than stop at the first.
    fn validate(
        &self,
        document: &[u8],
        format: DocumentFormat,
        spec_version: Option<&str>,
    ) -> Vec<String>;
}
