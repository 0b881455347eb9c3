use anyhow::{anyhow, Context};
use profilekit_catalog::Catalog;
use profilekit_editor::ProfileVariables;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "profilekit.config.json";

/// Profilekit configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Profile variables used when rendering
    #[serde(default)]
    pub profile: ProfileVariables,

    /// Catalog file replacing the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,

    /// Maximum undo levels (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Archetype used by `new` when none is given
    #[serde(default = "default_archetype")]
    pub default_archetype: String,
}

fn default_history_limit() -> usize {
    100
}

fn default_archetype() -> String {
    "builder".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", config_path.display()))?;
            debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Catalog at `catalogPath` (relative to `cwd`), or the built-in one
    pub fn catalog(&self, cwd: &Path) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog(&cwd.join(path)),
            None => Ok(Catalog::builtin()?),
        }
    }

    /// Configured profile variables with command-line overrides applied
    pub fn variables(&self, overrides: &[(String, String)]) -> ProfileVariables {
        let mut variables = self.profile.clone();
        for (key, value) in overrides {
            variables.set(key.clone(), value.clone());
        }
        variables
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileVariables::new(),
            catalog_path: None,
            history_limit: default_history_limit(),
            default_archetype: default_archetype(),
        }
    }
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    Catalog::load(path).with_context(|| format!("Failed to load catalog {}", path.display()))
}

/// Parse a `key=value` pair given with `--var`
pub fn parse_var(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing variable name in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Fail unless `path` exists, with a message naming it
pub fn require_file(path: &Path) -> anyhow::Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(anyhow!("File does not exist: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "profile": { "name": "Ada Lovelace", "username": "ada" },
            "catalogPath": "catalog.json",
            "historyLimit": 5,
            "defaultArchetype": "researcher"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.profile.get("name"), Some("Ada Lovelace"));
        assert_eq!(config.catalog_path, Some("catalog.json".to_string()));
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.default_archetype, "researcher");
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.profile.is_empty());
        assert_eq!(config.history_limit, 100);
        assert_eq!(config.default_archetype, "builder");
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_and_custom_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "catalogPath": "custom.json" }"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("custom.json"),
            r#"{ "components": [{ "id": "only", "name": "Only", "description": "",
                "category": "x", "fields": [], "template": "hi" }] }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        let catalog = config.catalog(dir.path()).unwrap();
        assert_eq!(catalog.components().len(), 1);
        assert!(catalog.archetypes().is_empty());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ not json").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn test_variable_overrides() {
        let config = Config {
            profile: ProfileVariables::new().with("name", "Ada").with("username", "ada"),
            ..Config::default()
        };

        let vars = config.variables(&[("name".to_string(), "Grace".to_string())]);
        assert_eq!(vars.get("name"), Some("Grace"));
        assert_eq!(vars.get("username"), Some("ada"));
    }

    #[test]
    fn test_parse_var() {
        assert_eq!(
            parse_var("website=https://a.dev?x=1"),
            Ok(("website".to_string(), "https://a.dev?x=1".to_string()))
        );
        assert!(parse_var("name").is_err());
        assert!(parse_var("=value").is_err());
    }
}
