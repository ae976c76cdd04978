//! Mail transport configuration
//!
//! SMTP credentials are read from a JSON file outside the web root,
//! `mail-config.json` by default or the path in the `MAIL_CONFIG`
//! environment variable. The submission endpoints refuse to run without a
//! complete configuration.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Mail configuration file not found")]
    NotFound,
    #[error("Failed to read mail configuration: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid mail configuration")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid mail configuration: {0}")]
    Incomplete(&'static str),
}

/// SMTP transport settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_user: String,
    pub smtp_pass: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

fn default_smtp_port() -> u16 {
    465
}

impl MailConfig {
    /// Load from the default location (`MAIL_CONFIG` env var or
    /// `mail-config.json` in the working directory).
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("MAIL_CONFIG").unwrap_or_else(|_| "mail-config.json".to_string());
        Self::load_from(path)
    }

    /// Load from a custom path.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound
            } else {
                ConfigError::Read(e)
            }
        })?;
        let config: MailConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.smtp_host.is_empty() {
            return Err(ConfigError::Incomplete("smtp_host is empty"));
        }
        if self.smtp_user.is_empty() {
            return Err(ConfigError::Incomplete("smtp_user is empty"));
        }
        if self.smtp_pass.is_empty() {
            return Err(ConfigError::Incomplete("smtp_pass is empty"));
        }
        Ok(())
    }
}
