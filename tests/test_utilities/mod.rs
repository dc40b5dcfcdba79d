//! Shared test utilities: mocks and domain fixture builders
#![allow(dead_code)]

pub mod mocks;

use project_vex::prelude::*;
use uuid::Uuid;

pub fn component_id() -> ComponentId {
    ComponentId::new(Uuid::new_v4())
}

pub fn project(name: &str, roots: &[ComponentId]) -> Project {
    Project::new(
        ProjectId::new(Uuid::new_v4()),
        name.to_string(),
        Some("1.0".to_string()),
    )
    .unwrap()
    .with_direct_dependencies(roots.to_vec())
}

pub fn vulnerability(source: &str, id: &str, severity: Severity) -> Vulnerability {
    Vulnerability::new(
        Uuid::new_v4(),
        VulnerabilityKey::new(source.to_string(), id.to_string()).unwrap(),
        severity,
    )
}
