use crate::shared::Result;
use std::collections::HashSet;
use std::str::FromStr;

/// Configured schema-validation mode for uploaded documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Enabled,
    Disabled,
    EnabledForTags,
    DisabledForTags,
}

impl FromStr for ValidationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ENABLED" => Ok(ValidationMode::Enabled),
            "DISABLED" => Ok(ValidationMode::Disabled),
            "ENABLED_FOR_TAGS" => Ok(ValidationMode::EnabledForTags),
            "DISABLED_FOR_TAGS" => Ok(ValidationMode::DisabledForTags),
            other => anyhow::bail!(
                "Unknown validation mode: {}. Expected one of ENABLED, DISABLED, ENABLED_FOR_TAGS, DISABLED_FOR_TAGS",
                other
            ),
        }
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValidationMode::Enabled => "ENABLED",
            ValidationMode::Disabled => "DISABLED",
            ValidationMode::EnabledForTags => "ENABLED_FOR_TAGS",
            ValidationMode::DisabledForTags => "DISABLED_FOR_TAGS",
        };
        write!(f, "{}", name)
    }
}

/// ValidationPolicy decides whether an upload must be schema-validated
///
/// The decision depends only on the configured mode, the configured tag
/// sets and the tags the target project carries at upload time. It is
/// evaluated for every upload; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    mode: ValidationMode,
    inclusive_tags: HashSet<String>,
    exclusive_tags: HashSet<String>,
}

impl ValidationPolicy {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            inclusive_tags: HashSet::new(),
            exclusive_tags: HashSet::new(),
        }
    }

    /// Tags that turn validation on under `ENABLED_FOR_TAGS`
    pub fn with_inclusive_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inclusive_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Tags that turn validation off under `DISABLED_FOR_TAGS`
    pub fn with_exclusive_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusive_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Whether a document uploaded to a project with `project_tags` must be validated
    pub fn must_validate(&self, project_tags: &[String]) -> bool {
        match self.mode {
            ValidationMode::Enabled => true,
            ValidationMode::Disabled => false,
            ValidationMode::EnabledForTags => Self::any_tag_in(project_tags, &self.inclusive_tags),
            ValidationMode::DisabledForTags => {
                !Self::any_tag_in(project_tags, &self.exclusive_tags)
            }
        }
    }

    fn any_tag_in(project_tags: &[String], configured: &HashSet<String>) -> bool {
        project_tags.iter().any(|tag| configured.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_enabled_always_validates() {
        let policy = ValidationPolicy::new(ValidationMode::Enabled);
        assert!(policy.must_validate(&[]));
        assert!(policy.must_validate(&tags(&["foo"])));
    }

    #[test]
    fn test_disabled_never_validates() {
        let policy = ValidationPolicy::new(ValidationMode::Disabled);
        assert!(!policy.must_validate(&[]));
        assert!(!policy.must_validate(&tags(&["foo"])));
    }

    #[test]
    fn test_enabled_for_tags() {
        let policy =
            ValidationPolicy::new(ValidationMode::EnabledForTags).with_inclusive_tags(["foo"]);
        assert!(policy.must_validate(&tags(&["foo"])));
        assert!(policy.must_validate(&tags(&["bar", "foo"])));
        assert!(!policy.must_validate(&tags(&["bar"])));
        assert!(!policy.must_validate(&[]));
    }

    #[test]
    fn test_disabled_for_tags() {
        let policy =
            ValidationPolicy::new(ValidationMode::DisabledForTags).with_exclusive_tags(["foo"]);
        assert!(!policy.must_validate(&tags(&["foo"])));
        assert!(policy.must_validate(&tags(&["bar"])));
        assert!(policy.must_validate(&[]));
    }

    #[test]
    fn test_tag_sets_only_apply_to_their_mode() {
        // An exclusive set has no effect under ENABLED_FOR_TAGS
        let policy = ValidationPolicy::new(ValidationMode::EnabledForTags)
            .with_exclusive_tags(["foo"]);
        assert!(!policy.must_validate(&tags(&["foo"])));
    }

    #[test]
    fn test_tags_match_exactly() {
        let policy =
            ValidationPolicy::new(ValidationMode::EnabledForTags).with_inclusive_tags(["foo"]);
        assert!(!policy.must_validate(&tags(&["Foo"])));
        assert!(!policy.must_validate(&tags(&["foobar"])));
    }

    #[test]
    fn test_default_is_enabled() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.mode(), ValidationMode::Enabled);
        assert!(policy.must_validate(&[]));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "enabled_for_tags".parse::<ValidationMode>().unwrap(),
            ValidationMode::EnabledForTags
        );
        assert_eq!(
            "DISABLED".parse::<ValidationMode>().unwrap(),
            ValidationMode::Disabled
        );
        let err = "SOMETIMES".parse::<ValidationMode>().unwrap_err();
        assert!(err.to_string().contains("Unknown validation mode"));
    }

    #[test]
    fn test_mode_display_round_trip() {
        for mode in [
            ValidationMode::Enabled,
            ValidationMode::Disabled,
            ValidationMode::EnabledForTags,
            ValidationMode::DisabledForTags,
        ] {
            assert_eq!(mode.to_string().parse::<ValidationMode>().unwrap(), mode);
        }
    }
}
