use crate::shared::Result;
use std::str::FromStr;

/// Audit state of a (component, vulnerability) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisState {
    NotSet,
    InTriage,
    Exploitable,
    Resolved,
    FalsePositive,
    NotAffected,
}

impl AnalysisState {
    /// CycloneDX `analysis.state`; `NotSet` has no counterpart and is omitted
    pub fn as_cyclonedx(&self) -> Option<&'static str> {
        match self {
            AnalysisState::NotSet => None,
            AnalysisState::InTriage => Some("in_triage"),
            AnalysisState::Exploitable => Some("exploitable"),
            AnalysisState::Resolved => Some("resolved"),
            AnalysisState::FalsePositive => Some("false_positive"),
            AnalysisState::NotAffected => Some("not_affected"),
        }
    }
}

impl FromStr for AnalysisState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "NOT_SET" => Ok(AnalysisState::NotSet),
            "IN_TRIAGE" => Ok(AnalysisState::InTriage),
            "EXPLOITABLE" => Ok(AnalysisState::Exploitable),
            "RESOLVED" => Ok(AnalysisState::Resolved),
            "FALSE_POSITIVE" => Ok(AnalysisState::FalsePositive),
            "NOT_AFFECTED" => Ok(AnalysisState::NotAffected),
            other => anyhow::bail!("Unknown analysis state: {}", other),
        }
    }
}

/// Why a vulnerability does not affect the component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisJustification {
    NotSet,
    CodeNotPresent,
    CodeNotReachable,
    RequiresConfiguration,
    RequiresDependency,
    RequiresEnvironment,
    ProtectedByCompiler,
    ProtectedAtRuntime,
    ProtectedAtPerimeter,
    ProtectedByMitigatingControl,
}

impl AnalysisJustification {
    pub fn as_cyclonedx(&self) -> Option<&'static str> {
        match self {
            AnalysisJustification::NotSet => None,
            AnalysisJustification::CodeNotPresent => Some("code_not_present"),
            AnalysisJustification::CodeNotReachable => Some("code_not_reachable"),
            AnalysisJustification::RequiresConfiguration => Some("requires_configuration"),
            AnalysisJustification::RequiresDependency => Some("requires_dependency"),
            AnalysisJustification::RequiresEnvironment => Some("requires_environment"),
            AnalysisJustification::ProtectedByCompiler => Some("protected_by_compiler"),
            AnalysisJustification::ProtectedAtRuntime => Some("protected_at_runtime"),
            AnalysisJustification::ProtectedAtPerimeter => Some("protected_at_perimeter"),
            AnalysisJustification::ProtectedByMitigatingControl => {
                Some("protected_by_mitigating_control")
            }
        }
    }
}

impl FromStr for AnalysisJustification {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "NOT_SET" => Ok(Self::NotSet),
            "CODE_NOT_PRESENT" => Ok(Self::CodeNotPresent),
            "CODE_NOT_REACHABLE" => Ok(Self::CodeNotReachable),
            "REQUIRES_CONFIGURATION" => Ok(Self::RequiresConfiguration),
            "REQUIRES_DEPENDENCY" => Ok(Self::RequiresDependency),
            "REQUIRES_ENVIRONMENT" => Ok(Self::RequiresEnvironment),
            "PROTECTED_BY_COMPILER" => Ok(Self::ProtectedByCompiler),
            "PROTECTED_AT_RUNTIME" => Ok(Self::ProtectedAtRuntime),
            "PROTECTED_AT_PERIMETER" => Ok(Self::ProtectedAtPerimeter),
            "PROTECTED_BY_MITIGATING_CONTROL" => Ok(Self::ProtectedByMitigatingControl),
            other => anyhow::bail!("Unknown analysis justification: {}", other),
        }
    }
}

/// Remediation response recorded by the analyst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisResponse {
    NotSet,
    CanNotFix,
    WillNotFix,
    Update,
    Rollback,
    WorkaroundAvailable,
}

impl AnalysisResponse {
    pub fn as_cyclonedx(&self) -> Option<&'static str> {
        match self {
            AnalysisResponse::NotSet => None,
            AnalysisResponse::CanNotFix => Some("can_not_fix"),
            AnalysisResponse::WillNotFix => Some("will_not_fix"),
            AnalysisResponse::Update => Some("update"),
            AnalysisResponse::Rollback => Some("rollback"),
            AnalysisResponse::WorkaroundAvailable => Some("workaround_available"),
        }
    }
}

impl FromStr for AnalysisResponse {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "NOT_SET" => Ok(Self::NotSet),
            "CAN_NOT_FIX" => Ok(Self::CanNotFix),
            "WILL_NOT_FIX" => Ok(Self::WillNotFix),
            "UPDATE" => Ok(Self::Update),
            "ROLLBACK" => Ok(Self::Rollback),
            "WORKAROUND_AVAILABLE" => Ok(Self::WorkaroundAvailable),
            other => anyhow::bail!("Unknown analysis response: {}", other),
        }
    }
}

/// Analyst decision for one (component, vulnerability) pair.
///
/// Equality is structural over every field; the rollup relies on it to
/// decide whether findings on different components can share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalysisDecision {
    state: AnalysisState,
    justification: Option<AnalysisJustification>,
    responses: Vec<AnalysisResponse>,
    detail: Option<String>,
    suppressed: bool,
}

impl AnalysisDecision {
    pub fn new(state: AnalysisState) -> Self {
        Self {
            state,
            justification: None,
            responses: Vec::new(),
            detail: None,
            suppressed: false,
        }
    }

    pub fn with_justification(mut self, justification: Option<AnalysisJustification>) -> Self {
        self.justification = justification;
        self
    }

    pub fn with_responses(mut self, responses: Vec<AnalysisResponse>) -> Self {
        self.responses = responses;
        self
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    pub fn suppressed(mut self, suppressed: bool) -> Self {
        self.suppressed = suppressed;
        self
    }

    pub fn state(&self) -> AnalysisState {
        self.state
    }

    pub fn justification(&self) -> Option<AnalysisJustification> {
        self.justification
    }

    pub fn responses(&self) -> &[AnalysisResponse] {
        &self.responses
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }
}
