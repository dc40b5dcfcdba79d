mod dependency_collector;
mod vex_metadata_generator;
mod vulnerability_rollup;

pub use dependency_collector::DependencyGraphCollector;
pub use vex_metadata_generator::{VexMetadataGenerator, TOOL_VENDOR};
pub use vulnerability_rollup::VulnerabilityRollup;
