//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAYFAST` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use payfast_gateway::config::PayfastConfig;
//!
//! let config = PayfastConfig::load_validated().expect("Invalid configuration");
//!
//! println!("Posting payments to {}", config.action_url());
//! ```

mod error;
mod server;

pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::payfast::constants::{
    ACTION_URL_DEV, ACTION_URL_LIVE, MERCHANT_ID_DEV, MERCHANT_KEY_DEV,
};

/// Header read for the notification sender when nothing else is configured.
pub const DEFAULT_IP_ADDRESS_HEADER: &str = "REMOTE_ADDR";

/// Root application configuration
///
/// Merchant credentials are optional as a pair: when neither is declared the
/// PayFast sandbox account is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayfastConfig {
    /// PayFast merchant identifier
    pub merchant_id: Option<String>,

    /// PayFast merchant key
    pub merchant_key: Option<SecretString>,

    /// Passphrase salting request and ITN signatures
    pub passphrase: Option<SecretString>,

    /// Request header carrying the real client IP behind a proxy
    pub ip_address_http_header: Option<String>,

    /// Notification endpoint server
    #[serde(default)]
    pub server: ServerConfig,
}

impl PayfastConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYFAST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYFAST__MERCHANT_ID=10000100` -> `merchant_id = "10000100"`
    /// - `PAYFAST__SERVER__PORT=8080` -> `server.port = 8080`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYFAST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` or `ConfigError::ValidationFailed`
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if only one of the merchant credentials is
    /// declared, the IP header name is blank, or the server settings are invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (self.declared_merchant_id(), self.declared_merchant_key()) {
            (Some(_), None) => {
                return Err(ValidationError::IncompleteMerchantCredentials {
                    declared: "PAYFAST__MERCHANT_ID",
                })
            }
            (None, Some(_)) => {
                return Err(ValidationError::IncompleteMerchantCredentials {
                    declared: "PAYFAST__MERCHANT_KEY",
                })
            }
            _ => {}
        }

        if let Some(header) = &self.ip_address_http_header {
            if header.trim().is_empty() || header.contains(char::is_whitespace) {
                return Err(ValidationError::InvalidIpAddressHeader(header.clone()));
            }
        }

        self.server.validate()?;
        Ok(())
    }

    /// True when both merchant credentials are declared (live account).
    pub fn has_merchant_credentials(&self) -> bool {
        self.declared_merchant_id().is_some() && self.declared_merchant_key().is_some()
    }

    /// Merchant identifier, falling back to the sandbox merchant.
    pub fn merchant_id(&self) -> String {
        self.declared_merchant_id()
            .map(str::to_string)
            .unwrap_or_else(|| MERCHANT_ID_DEV.to_string())
    }

    /// Merchant key, falling back to the sandbox merchant key.
    pub fn merchant_key(&self) -> SecretString {
        SecretString::new(
            self.declared_merchant_key()
                .unwrap_or(MERCHANT_KEY_DEV)
                .to_string(),
        )
    }

    /// Live process URL with merchant credentials, sandbox otherwise.
    pub fn action_url(&self) -> &'static str {
        if self.has_merchant_credentials() {
            ACTION_URL_LIVE
        } else {
            ACTION_URL_DEV
        }
    }

    /// Passphrase, if a non-empty one is declared.
    pub fn passphrase(&self) -> Option<SecretString> {
        self.passphrase
            .as_ref()
            .filter(|secret| !secret.expose_secret().is_empty())
            .cloned()
    }

    /// Header to read the notification sender from.
    pub fn ip_address_header(&self) -> &str {
        self.ip_address_http_header
            .as_deref()
            .unwrap_or(DEFAULT_IP_ADDRESS_HEADER)
    }

    fn declared_merchant_id(&self) -> Option<&str> {
        self.merchant_id.as_deref().filter(|id| !id.is_empty())
    }

    fn declared_merchant_key(&self) -> Option<&str> {
        self.merchant_key
            .as_ref()
            .map(|key| key.expose_secret().as_str())
            .filter(|key| !key.is_empty())
    }
}
