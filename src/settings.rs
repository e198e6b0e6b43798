use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Toml(#[from] basic_toml::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AadGateSettings {
    pub email: EmailSettings,
    pub logging: LoggingSettings,
}

/// Organization email validation settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmailSettings {
    /// Regex the email must match, with up to two capture groups
    /// (two-digit year suffix, numeric member index)
    pub pattern: String,
    /// Comma-separated list of denied email addresses
    pub denylist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AadGateSettings {
    /// Load settings from configuration files and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Settings.toml in the current directory (if it exists)
    /// 3. Default settings
    ///
    /// # Errors
    ///
    /// Returns an error if Settings.toml exists but cannot be read or parsed.
    pub fn load() -> Result<Self, SettingsError> {
        let mut settings = Self::load_base_settings()?;
        Self::apply_env_overrides(&mut settings);
        Ok(settings)
    }

    /// Initialize the `env_logger` backend with the configured level
    ///
    /// `RUST_LOG` takes precedence over the configured level. Repeated
    /// initialization is ignored so tests can call this freely.
    pub fn init_logging(&self) {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.logging.level),
        )
        .try_init()
        .ok();
    }

    /// Load base settings from Settings.toml or use defaults
    fn load_base_settings() -> Result<Self, SettingsError> {
        let config_path = std::path::PathBuf::from("Settings.toml");
        if config_path.exists() {
            let toml_content = fs::read_to_string(&config_path)?;
            return Ok(basic_toml::from_str(&toml_content)?);
        }
        Ok(Self::default())
    }

    /// Apply environment variable overrides to settings
    fn apply_env_overrides(settings: &mut Self) {
        Self::apply_email_env_overrides(&mut settings.email);
        Self::apply_logging_env_overrides(&mut settings.logging);
    }

    /// Apply environment overrides for email validation settings
    fn apply_email_env_overrides(email_settings: &mut EmailSettings) {
        if let Ok(pattern) = std::env::var("AAD_EMAIL_REGEX") {
            email_settings.pattern = pattern;
        }
        if let Ok(denylist) = std::env::var("AAD_DENYLIST") {
            email_settings.denylist = denylist;
        }
    }

    /// Apply environment overrides for logging settings
    fn apply_logging_env_overrides(logging_settings: &mut LoggingSettings) {
        if let Ok(level) = std::env::var("AADGATE_LOG_LEVEL") {
            logging_settings.level = level;
        }
    }
}
