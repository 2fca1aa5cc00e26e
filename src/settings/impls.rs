// Standard library
use std::time::Duration;

// 3rd party crates
use config::{Config, ConfigError, File, FileFormat};
use tracing::error;

// Current module imports
use super::constants::{DEFAULT_CONFIG, LOG_LEVELS};
use super::errors::ValidationError;
use super::types::{Settings, ValidatedSettings};

impl Settings {
    /// Loads the built-in configuration.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let settings: Config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !LOG_LEVELS.contains(&self.get_log_level().as_str()) {
            return Err(ValidationError::InvalidLogLevel(self.log.level.clone()));
        }

        if self.http.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout(self.http.timeout_secs));
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(ValidationError::EmptyUserAgent);
        }

        Ok(())
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate().map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;
        Ok(ValidatedSettings(settings))
    }
}

impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
