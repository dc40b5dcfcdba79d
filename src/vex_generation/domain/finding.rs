use super::{AnalysisDecision, ComponentId, Vulnerability};

/// Finding value object: an analyzer reported `vulnerability` on `component`
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    component: ComponentId,
    vulnerability: Vulnerability,
}

impl Finding {
    pub fn new(component: ComponentId, vulnerability: Vulnerability) -> Self {
        Self {
            component,
            vulnerability,
        }
    }

    pub fn component(&self) -> ComponentId {
        self.component
    }

    pub fn vulnerability(&self) -> &Vulnerability {
        &self.vulnerability
    }

    /// Attaches the analyst decision (if any) recorded for this finding
    pub fn audited(self, decision: Option<AnalysisDecision>) -> AuditedFinding {
        AuditedFinding {
            finding: self,
            decision,
        }
    }
}

/// A finding together with the decision snapshot read for the current export
#[derive(Debug, Clone, PartialEq)]
pub struct AuditedFinding {
    finding: Finding,
    decision: Option<AnalysisDecision>,
}

impl AuditedFinding {
    pub fn finding(&self) -> &Finding {
        &self.finding
    }

    pub fn decision(&self) -> Option<&AnalysisDecision> {
        self.decision.as_ref()
    }

    pub fn into_parts(self) -> (Finding, Option<AnalysisDecision>) {
        (self.finding, self.decision)
    }
}
