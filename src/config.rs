use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn default_database() -> PathBuf {
    PathBuf::from("data/database.ron")
}

/// Analyzer settings read from a RON file. Every field has a default, so an
/// empty `()` document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalityConfig {
    /// Reference database; `.ron` text or a postcard snapshot.
    pub database: PathBuf,
    /// Names of field rules to leave out of the analysis.
    pub disabled_rules: Vec<String>,
}

impl Default for LegalityConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            disabled_rules: Vec::new(),
        }
    }
}

impl LegalityConfig {
    pub fn from_ron_str(input: &str) -> ConfigResult<Self> {
        Ok(ron::from_str(input)?)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&content)?;
        debug!(path = %path.display(), disabled = config.disabled_rules.len(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LegalityConfig::from_ron_str("()").unwrap();
        assert_eq!(config, LegalityConfig::default());
        assert_eq!(config.database, PathBuf::from("data/database.ron"));
    }

    #[test]
    fn test_reads_disabled_rules() {
        let config = LegalityConfig::from_ron_str(
            r#"(database: "tables/db.bin", disabled_rules: ["ribbons", "memory"])"#,
        )
        .unwrap();
        assert_eq!(config.database, PathBuf::from("tables/db.bin"));
        assert_eq!(config.disabled_rules, vec!["ribbons".to_string(), "memory".to_string()]);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let result = LegalityConfig::from_ron_str("(disabled_rules: 5)");
        assert!(matches!(result, Err(ConfigError::Ron(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("does/not/exist.ron");
        match LegalityConfig::load(path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
