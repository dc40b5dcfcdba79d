//! Read models for the CQRS-lite pattern
//!
//! View-optimized structs built from domain objects for formatters.

pub mod vex_document_builder;
pub mod vex_read_model;

pub use vex_document_builder::VexDocumentBuilder;
pub use vex_read_model::{
    AnalysisView, SubjectView, VexMetadataView, VexReadModel, VulnerabilityView,
};
