/// Formatter adapters for VEX output formats
mod cyclonedx_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
