use serde::{Deserialize, Serialize};

use crate::errors::{LinkdeckError, Result};

use super::PAGE_SIZE_OPTIONS;

/// Static configuration, loaded once at startup.
///
/// Priority: ENV > config.toml > defaults.
/// ENV prefix: LD, separator: __
/// Example: LD__API__BASE_URL=http://shrink.example.com/api
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// Load configuration from a TOML file and environment variables.
    ///
    /// A missing file is fine; a malformed one falls back to defaults with a
    /// diagnostic on stderr (the TUI has not taken over the terminal yet).
    pub fn load(path: Option<&str>) -> Self {
        use config::{Config, Environment, File};

        let path = path.unwrap_or("config.toml");

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("LD")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// Sanity-check the loaded values before handing them to the client.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url)
            .map_err(|e| LinkdeckError::config(format!("invalid api.base_url: {}", e)))?;
        url::Url::parse(&self.api.public_base_url)
            .map_err(|e| LinkdeckError::config(format!("invalid api.public_base_url: {}", e)))?;

        if !PAGE_SIZE_OPTIONS.contains(&self.ui.page_size) {
            return Err(LinkdeckError::config(format!(
                "ui.page_size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS, self.ui.page_size
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(LinkdeckError::config("api.timeout_secs must be > 0"));
        }

        Ok(())
    }

    /// Generate a sample TOML configuration file.
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Remote API endpoints and transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base path of the JSON API, e.g. `http://localhost:8000/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Public host serving `/r/{slug}` redirects; used to build short URLs.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            public_base_url: default_public_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Interface defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Links per page on startup. Must be one of 5, 10, 25, 50.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Logging configuration.
///
/// `file = None` disables log output entirely: the terminal is owned by the
/// interface, so logs never go to stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_page_size() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "plain".to_string()
}

fn default_max_backups() -> u32 {
    7
}

fn default_enable_rotation() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StaticConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.ui.page_size, 5);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = StaticConfig::default();
        config.api.base_url = "not a url".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, LinkdeckError::Config(_)));
        assert!(err.message().contains("base_url"));
    }

    #[test]
    fn test_validate_rejects_odd_page_size() {
        let mut config = StaticConfig::default();
        config.ui.page_size = 7;

        let err = config.validate().unwrap_err();
        assert!(err.message().contains("page_size"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = StaticConfig::default();
        config.api.timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = StaticConfig::generate_sample_config();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();

        assert_eq!(parsed.api.base_url, StaticConfig::default().api.base_url);
        assert_eq!(parsed.ui.page_size, StaticConfig::default().ui.page_size);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = StaticConfig::load(Some("definitely-not-here.toml"));
        assert_eq!(config.api.base_url, default_base_url());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = StaticConfig::default();
        config.api.base_url = "http://shrink.example.com/api".to_string();
        config.save_to_file(&path).unwrap();

        let reloaded = StaticConfig::load(path.to_str());
        assert_eq!(reloaded.api.base_url, "http://shrink.example.com/api");
    }
}
