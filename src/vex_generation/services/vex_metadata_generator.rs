use crate::vex_generation::domain::VexMetadata;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Vendor reported in the generating-tool descriptor
pub const TOOL_VENDOR: &str = "project-vex";

/// VexMetadataGenerator service for stamping generated documents
///
/// Every export gets a fresh timestamp and a random `urn:uuid` serial number.
pub struct VexMetadataGenerator;

impl VexMetadataGenerator {
    /// Generates document metadata for the given tool
    ///
    /// # Arguments
    /// * `tool_vendor` - Vendor of the generating tool
    /// * `tool_name` - Name of the generating tool
    /// * `tool_version` - Version of the generating tool
    pub fn generate_metadata(
        tool_vendor: &str,
        tool_name: &str,
        tool_version: &str,
    ) -> VexMetadata {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        VexMetadata::new(
            timestamp,
            tool_vendor.to_string(),
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Generates metadata describing this crate as the tool
    pub fn generate_default_metadata() -> VexMetadata {
        Self::generate_metadata(TOOL_VENDOR, env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
