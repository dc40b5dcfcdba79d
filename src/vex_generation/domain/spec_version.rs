use crate::shared::error::VexError;
use crate::shared::Result;

/// CycloneDX specification versions this crate can emit.
///
/// Only versions that carry a `vulnerabilities` section are offered;
/// anything older cannot express a VEX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecVersion {
    V1_4,
    V1_5,
    V1_6,
}

impl SpecVersion {
    /// Version used when the caller does not ask for one
    pub const DEFAULT: SpecVersion = SpecVersion::V1_5;

    pub const SUPPORTED: [SpecVersion; 3] =
        [SpecVersion::V1_4, SpecVersion::V1_5, SpecVersion::V1_6];

    /// Resolves a requested version against the supported set.
    ///
    /// The input is trimmed; an empty or absent request yields the default.
    /// Any other value must match a supported version exactly. No numeric
    /// parsing, rounding or prefix matching is attempted.
    ///
    /// # Errors
    /// Returns `VexError::InvalidVersion` for any unsupported value
    pub fn resolve(requested: Option<&str>) -> Result<Self> {
        let trimmed = requested.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Ok(Self::DEFAULT);
        }

        Self::SUPPORTED
            .into_iter()
            .find(|version| version.as_str() == trimmed)
            .ok_or_else(|| {
                VexError::InvalidVersion {
                    requested: requested.unwrap_or_default().to_string(),
                }
                .into()
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecVersion::V1_4 => "1.4",
            SpecVersion::V1_5 => "1.5",
            SpecVersion::V1_6 => "1.6",
        }
    }

    /// Vulnerability sections exist from 1.4 onward
    pub fn supports_vulnerabilities(&self) -> bool {
        *self >= SpecVersion::V1_4
    }
}

impl std::fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
