use crate::shared::Result;
use std::str::FromStr;
use uuid::Uuid;

/// Maximum length for vulnerability identifiers (security limit)
const MAX_VULN_ID_LENGTH: usize = 255;

/// Severity levels as recorded by the analyzers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
    Unassigned,
}

impl Severity {
    /// CycloneDX rating severity; unassigned severities are reported as `unknown`
    pub fn as_cyclonedx(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
            Severity::Unassigned => "unknown",
        }
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" => Ok(Severity::Critical),
            "HIGH" => Ok(Severity::High),
            "MEDIUM" => Ok(Severity::Medium),
            "LOW" => Ok(Severity::Low),
            "INFO" => Ok(Severity::Info),
            "UNASSIGNED" | "" => Ok(Severity::Unassigned),
            other => anyhow::bail!("Unknown severity: {}", other),
        }
    }
}

/// Identity of a vulnerability: the (source, vuln-id) pair, e.g. `(INTERNAL, INT-001)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VulnerabilityKey {
    source: String,
    vuln_id: String,
}

impl VulnerabilityKey {
    pub fn new(source: String, vuln_id: String) -> Result<Self> {
        let source = source.trim().to_uppercase();
        if source.is_empty() {
            anyhow::bail!("Vulnerability source cannot be empty");
        }
        if vuln_id.trim().is_empty() {
            anyhow::bail!("Vulnerability id cannot be empty");
        }
        if vuln_id.len() > MAX_VULN_ID_LENGTH {
            anyhow::bail!(
                "Vulnerability id is too long ({} bytes). Maximum allowed: {} bytes",
                vuln_id.len(),
                MAX_VULN_ID_LENGTH
            );
        }
        Ok(Self { source, vuln_id })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn vuln_id(&self) -> &str {
        &self.vuln_id
    }
}

impl std::fmt::Display for VulnerabilityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.source, self.vuln_id)
    }
}

/// Vulnerability record as stored by the datastore
#[derive(Debug, Clone, PartialEq)]
pub struct Vulnerability {
    uuid: Uuid,
    key: VulnerabilityKey,
    severity: Severity,
}

impl Vulnerability {
    pub fn new(uuid: Uuid, key: VulnerabilityKey, severity: Severity) -> Self {
        Self {
            uuid,
            key,
            severity,
        }
    }

    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    pub fn key(&self) -> &VulnerabilityKey {
        &self.key
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Document-internal reference for the vulnerability record
    pub fn bom_ref(&self) -> String {
        self.uuid.to_string()
    }
}
