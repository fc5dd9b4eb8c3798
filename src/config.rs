use std::path::Path;

use crate::error::ConfigError;

/// Application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Look-ahead of the search-backed bot, in plies.
    pub search_depth: usize,
    /// Pause before a bot answers, in milliseconds.
    pub bot_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            search_depth: crate::ai::DEFAULT_DEPTH,
            bot_delay_ms: 250,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth > 12 {
            return Err(ConfigError::Validation(
                "search_depth must be at most 12".into(),
            ));
        }
        if self.bot_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "bot_delay_ms must be at most 10000".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.search_depth, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str("search_depth = 5").unwrap();
        assert_eq!(config.search_depth, 5);
        assert_eq!(config.bot_delay_ms, 250);
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let config = AppConfig {
            search_depth: 13,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = AppConfig::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.search_depth, 3);
    }
}
