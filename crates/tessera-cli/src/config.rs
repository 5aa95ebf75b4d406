//! Editor configuration loaded from `tessera.toml`

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tessera_schema::{ExtensionRule, ExtensionRules};

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "tessera.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub editor: EditorSection,
    #[serde(default)]
    pub preview: PreviewSection,
    /// Extra structured-property rules, applied after the built-in ones
    #[serde(default, rename = "extension")]
    pub extensions: Vec<ExtensionRule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorSection {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Write scenes as indented JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: default_pretty(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pretty() -> bool {
    true
}

/// External commands driving the preview. Each is a program followed by its arguments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewSection {
    #[serde(default)]
    pub start: Vec<String>,
    #[serde(default)]
    pub pause: Vec<String>,
    #[serde(default)]
    pub stop: Vec<String>,
}

impl EditorConfig {
    /// Load from an explicit path, or from `tessera.toml` when present.
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in extension rules followed by the configured ones
    pub fn extension_rules(&self) -> ExtensionRules {
        let mut rules = ExtensionRules::builtin();
        rules.extend(self.extensions.iter().cloned());
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_schema::StructuredKind;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EditorConfig::parse("").unwrap();
        assert_eq!(config.editor.log_level, "info");
        assert!(config.editor.pretty);
        assert!(config.preview.start.is_empty());
        assert_eq!(config.extension_rules().len(), 3);
    }

    #[test]
    fn test_full_config() {
        let config = EditorConfig::parse(
            r#"
[editor]
log_level = "debug"
pretty = false

[preview]
start = ["engine", "--stdin"]
stop = ["engine-ctl", "stop"]

[[extension]]
component = "Spawner"
property = "interval"
kind = "duration"

[[extension]]
property = "area"
kind = "bounds"
"#,
        )
        .unwrap();

        assert_eq!(config.editor.log_level, "debug");
        assert!(!config.editor.pretty);
        assert_eq!(config.preview.start, vec!["engine", "--stdin"]);
        assert!(config.preview.pause.is_empty());

        let rules = config.extension_rules();
        assert_eq!(rules.resolve("Spawner", "interval"), Some(StructuredKind::Duration));
        assert_eq!(rules.resolve("Anything", "area"), Some(StructuredKind::Bounds));
        assert_eq!(rules.resolve("Turret", "interval"), None);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = EditorConfig::parse("[[extension]]\nproperty = \"x\"\nkind = \"sphere\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[editor]\nlog_level = \"warn\"\n").unwrap();

        let config = EditorConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.editor.log_level, "warn");
        assert!(EditorConfig::load(Some(dir.path().join("missing.toml").as_path())).is_err());
    }
}
