//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::router::NavigationLog;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Page-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Origin the navigation URLs are built against
    #[serde(default = "default_origin")]
    pub origin: String,

    /// JSON file to read entries from instead of the bundled set
    #[serde(default)]
    pub entries: Option<PathBuf>,
}

fn default_origin() -> String {
    "http://127.0.0.1:5500".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            entries: None,
        }
    }
}

/// History tracker settings
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Start the navigation log with the implicit home entry
    #[serde(default = "default_seed_home")]
    pub seed_home: bool,
}

fn default_seed_home() -> bool {
    true
}

impl RouterConfig {
    /// The log a new session's tracker starts from
    pub fn baseline(&self) -> NavigationLog {
        if self.seed_home {
            NavigationLog::with_home()
        } else {
            NavigationLog::new()
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            seed_home: default_seed_home(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("journal").join("config.toml")),
            Some(PathBuf::from("./journal.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `JOURNAL_*` overrides read through `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(origin) = lookup("JOURNAL_ORIGIN") {
            self.app.origin = origin;
        }
        if let Some(entries) = lookup("JOURNAL_ENTRIES") {
            self.app.entries = Some(PathBuf::from(entries));
        }

        if let Some(seed) = lookup("JOURNAL_SEED_HOME") {
            if let Ok(seed) = seed.parse() {
                self.router.seed_home = seed;
            }
        }

        if let Some(level) = lookup("JOURNAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("JOURNAL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Journal Configuration
#
# Environment variables override these settings:
# - JOURNAL_ORIGIN
# - JOURNAL_ENTRIES
# - JOURNAL_SEED_HOME
# - JOURNAL_LOG_LEVEL
# - JOURNAL_LOG_FORMAT

[app]
# Origin navigation URLs are built against
origin = "http://127.0.0.1:5500"

# Optional JSON file with entries (defaults to the bundled set)
# entries = "./entries.json"

[router]
# Start each session's navigation log with an implicit home entry
seed_home = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.app.origin, "http://127.0.0.1:5500");
        assert!(config.app.entries.is_none());
        assert!(config.router.seed_home);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.app.origin, "http://127.0.0.1:5500");
        assert!(config.router.seed_home);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[router]\nseed_home = false").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(!config.router.seed_home);
        assert_eq!(config.app.origin, "http://127.0.0.1:5500");
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/nonexistent/journal.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[router\nseed_home = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("JOURNAL_ORIGIN", "http://localhost:8080"),
            ("JOURNAL_SEED_HOME", "false"),
            ("JOURNAL_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.app.origin, "http://localhost:8080");
        assert!(!config.router.seed_home);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_baseline() {
        let mut router = RouterConfig::default();
        assert_eq!(router.baseline().len(), 1);

        router.seed_home = false;
        assert!(router.baseline().is_empty());
    }

    #[test]
    fn test_invalid_seed_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "JOURNAL_SEED_HOME").then(|| "maybe".to_string()));
        assert!(config.router.seed_home);
    }
}
