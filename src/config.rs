//! Configuration file support for project-vex.
//!
//! Provides YAML-based configuration through `project-vex.config.yml` files:
//! the upload validation policy and the upload size limit.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::use_cases::UploadSettings;
use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::policies::{
    UploadSizeGuard, ValidationMode, ValidationPolicy, DEFAULT_MAX_VEX_LENGTH,
};

pub const CONFIG_FILENAME: &str = "project-vex.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub bom_validation_mode: Option<String>,
    pub bom_validation_tags_inclusive: Option<Vec<String>>,
    pub bom_validation_tags_exclusive: Option<Vec<String>>,
    pub vex_max_length: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The validation policy described by this file; unset keys take defaults.
    pub fn validation_policy(&self) -> Result<ValidationPolicy> {
        let mode = match self.bom_validation_mode.as_deref() {
            Some(value) => value.parse::<ValidationMode>().map_err(|e| VexError::ConfigError {
                message: format!(
                    "bom_validation_mode: {}\n\n💡 Hint: Use one of ENABLED, DISABLED, ENABLED_FOR_TAGS, DISABLED_FOR_TAGS.",
                    e
                ),
            })?,
            None => ValidationMode::default(),
        };

        Ok(ValidationPolicy::new(mode)
            .with_inclusive_tags(self.bom_validation_tags_inclusive.clone().unwrap_or_default())
            .with_exclusive_tags(self.bom_validation_tags_exclusive.clone().unwrap_or_default()))
    }

    pub fn size_guard(&self) -> UploadSizeGuard {
        UploadSizeGuard::new(self.vex_max_length.unwrap_or(DEFAULT_MAX_VEX_LENGTH))
    }

    /// Everything the upload use case needs from configuration.
    pub fn upload_settings(&self) -> Result<UploadSettings> {
        Ok(UploadSettings {
            policy: self.validation_policy()?,
            size_guard: self.size_guard(),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.validation_policy()?;

    for (key, tags) in [
        (
            "bom_validation_tags_inclusive",
            &config.bom_validation_tags_inclusive,
        ),
        (
            "bom_validation_tags_exclusive",
            &config.bom_validation_tags_exclusive,
        ),
    ] {
        let Some(tags) = tags else { continue };
        if let Some(i) = tags.iter().position(|tag| tag.trim().is_empty()) {
            return Err(VexError::ConfigError {
                message: format!(
                    "{}[{}] must not be empty.\n\n💡 Hint: Each tag must be a non-empty string (e.g., \"production\").",
                    key, i
                ),
            }
            .into());
        }
    }

    if config.vex_max_length == Some(0) {
        return Err(VexError::ConfigError {
            message: "vex_max_length must be greater than zero.".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
bom_validation_mode: ENABLED_FOR_TAGS
bom_validation_tags_inclusive:
  - foo
  - bar
bom_validation_tags_exclusive:
  - baz
vex_max_length: 1024
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.bom_validation_mode.as_deref(), Some("ENABLED_FOR_TAGS"));
        assert_eq!(
            config.bom_validation_tags_inclusive.as_deref(),
            Some(&["foo".to_string(), "bar".to_string()][..])
        );
        assert_eq!(config.vex_max_length, Some(1024));

        let policy = config.validation_policy().unwrap();
        assert_eq!(policy.mode(), ValidationMode::EnabledForTags);
        assert!(policy.must_validate(&["bar".to_string()]));
        assert!(!policy.must_validate(&["baz".to_string()]));
        assert_eq!(config.size_guard().max_length(), 1024);
    }

    #[test]
    fn test_defaults_when_keys_absent() {
        let config = ConfigFile::default();
        let settings = config.upload_settings().unwrap();
        assert_eq!(settings.policy.mode(), ValidationMode::Enabled);
        assert_eq!(settings.size_guard.max_length(), DEFAULT_MAX_VEX_LENGTH);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "bom_validation_mode: disabled\n",
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(
            config.validation_policy().unwrap().mode(),
            ValidationMode::Disabled
        );
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "bom_validation_mode: SOMETIMES\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VexError>(),
            Some(VexError::ConfigError { .. })
        ));
        assert!(err.to_string().contains("bom_validation_mode"));
    }

    #[test]
    fn test_empty_tag_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
bom_validation_tags_exclusive:
  - ok
  - "   "
"#,
        );

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("bom_validation_tags_exclusive[1] must not be empty"));
    }

    #[test]
    fn test_zero_length_limit_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "vex_max_length: 0\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("vex_max_length must be greater than zero"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
bom_validation_mode: ENABLED
unknown_field: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }
}
