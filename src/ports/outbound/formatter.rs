use crate::application::read_models::VexReadModel;
use crate::shared::Result;

/// VexFormatter port for serializing VEX documents
pub trait VexFormatter {
    /// Formats the document read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &VexReadModel) -> Result<String>;
}
