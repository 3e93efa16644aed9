use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// HotPepper web service settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// API credential. Absence is surfaced on first use, not at startup.
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            key: None,
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://webservice.recruit.co.jp/hotpepper".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables prefixed with HOTPEPPER__
    ///    (e.g. HOTPEPPER__API__BASE_URL -> api.base_url)
    /// 4. The conventional HOTPEPPER_API_KEY variable
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("HOTPEPPER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // The variable name the upstream documentation uses wins over everything
        if let Ok(key) = std::env::var("HOTPEPPER_API_KEY") {
            builder = builder.set_override("api.key", key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HOTPEPPER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.key, None);
        assert_eq!(
            settings.api.base_url,
            "https://webservice.recruit.co.jp/hotpepper"
        );
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_empty_sources_deserialize_to_defaults() {
        let settings: Settings = Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("empty configuration should fall back to defaults");
        assert!(settings.api.key.is_none());
        assert_eq!(
            settings.api.base_url,
            "https://webservice.recruit.co.jp/hotpepper"
        );
    }
}
