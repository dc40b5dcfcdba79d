/// VexMetadata value object: document-level metadata of a generated VEX
#[derive(Debug, Clone)]
pub struct VexMetadata {
    timestamp: String,
    tool_vendor: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

impl VexMetadata {
    pub fn new(
        timestamp: String,
        tool_vendor: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
    ) -> Self {
        Self {
            timestamp,
            tool_vendor,
            tool_name,
            tool_version,
            serial_number,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_vendor(&self) -> &str {
        &self.tool_vendor
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}
