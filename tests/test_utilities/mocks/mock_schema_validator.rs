use project_vex::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock SchemaValidator returning canned violations and counting calls
#[derive(Default, Clone)]
pub struct MockSchemaValidator {
    pub violations: Vec<String>,
    pub calls: Arc<AtomicUsize>,
}

impl MockSchemaValidator {
    /// Accepts every document
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Rejects every document with the given violations
    pub fn rejecting(violations: &[&str]) -> Self {
        Self {
            violations: violations.iter().map(|v| v.to_string()).collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SchemaValidator for MockSchemaValidator {
    fn validate(
        &self,
        _document: &[u8],
        _format: DocumentFormat,
        _spec_version: Option<&str>,
    ) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.violations.clone()
    }
}
