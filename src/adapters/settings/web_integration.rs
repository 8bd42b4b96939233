//! Config source backed by the application settings.

use secrecy::SecretString;

use crate::config::{PayfastConfig, ValidationError};
use crate::domain::payfast::FieldValue;
use crate::ports::PayfastConfigSource;

/// Serves PayFast configuration from the loaded [`PayfastConfig`].
///
/// Without merchant credentials this falls back to the PayFast sandbox
/// merchant and process URL.
#[derive(Debug, Clone)]
pub struct WebIntegrationConfig {
    config: PayfastConfig,
}

impl WebIntegrationConfig {
    /// Wraps validated settings.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::IncompleteMerchantCredentials` when only one of
    /// the merchant id and key is declared.
    pub fn new(config: PayfastConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        if !config.has_merchant_credentials() {
            tracing::info!("No merchant credentials configured, using the PayFast sandbox");
        }
        Ok(Self { config })
    }

    pub fn settings(&self) -> &PayfastConfig {
        &self.config
    }
}

impl PayfastConfigSource for WebIntegrationConfig {
    fn merchant_id(&self) -> FieldValue {
        FieldValue::Text(self.config.merchant_id())
    }

    fn merchant_key(&self) -> SecretString {
        self.config.merchant_key()
    }

    fn action_url(&self) -> String {
        self.config.action_url().to_string()
    }

    fn passphrase(&self) -> Option<SecretString> {
        self.config.passphrase()
    }

    fn ip_address_header(&self) -> String {
        self.config.ip_address_header().to_string()
    }
}
