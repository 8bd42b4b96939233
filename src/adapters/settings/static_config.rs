//! Fixed-value config source.
//!
//! Useful for tests and for hosts that resolve merchant credentials
//! themselves, e.g. one account per tenant.

use secrecy::SecretString;

use crate::config::DEFAULT_IP_ADDRESS_HEADER;
use crate::domain::payfast::constants::{ACTION_URL_DEV, MERCHANT_ID_DEV, MERCHANT_KEY_DEV};
use crate::domain::payfast::FieldValue;
use crate::ports::PayfastConfigSource;

/// Config source returning the values it was built with.
#[derive(Debug, Clone)]
pub struct StaticPayfastConfig {
    merchant_id: FieldValue,
    merchant_key: SecretString,
    action_url: String,
    passphrase: Option<SecretString>,
    ip_address_header: String,
}

impl StaticPayfastConfig {
    pub fn new(
        merchant_id: impl Into<FieldValue>,
        merchant_key: impl Into<String>,
        action_url: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_key: SecretString::new(merchant_key.into()),
            action_url: action_url.into(),
            passphrase: None,
            ip_address_header: DEFAULT_IP_ADDRESS_HEADER.to_string(),
        }
    }

    /// PayFast sandbox merchant.
    pub fn sandbox() -> Self {
        Self::new(MERCHANT_ID_DEV, MERCHANT_KEY_DEV, ACTION_URL_DEV)
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        let passphrase = passphrase.into();
        self.passphrase = if passphrase.is_empty() {
            None
        } else {
            Some(SecretString::new(passphrase))
        };
        self
    }

    pub fn with_ip_address_header(mut self, header: impl Into<String>) -> Self {
        self.ip_address_header = header.into();
        self
    }
}

impl Default for StaticPayfastConfig {
    fn default() -> Self {
        Self::sandbox()
    }
}

impl PayfastConfigSource for StaticPayfastConfig {
    fn merchant_id(&self) -> FieldValue {
        self.merchant_id.clone()
    }

    fn merchant_key(&self) -> SecretString {
        self.merchant_key.clone()
    }

    fn action_url(&self) -> String {
        self.action_url.clone()
    }

    fn passphrase(&self) -> Option<SecretString> {
        self.passphrase.clone()
    }

    fn ip_address_header(&self) -> String {
        self.ip_address_header.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn sandbox_uses_integer_merchant_id() {
        let source = StaticPayfastConfig::sandbox();
        assert_eq!(source.merchant_id(), FieldValue::Integer(10000100));
        assert_eq!(source.merchant_key().expose_secret(), "46f0cd694581a");
        assert_eq!(source.action_url(), ACTION_URL_DEV);
        assert_eq!(source.ip_address_header(), "REMOTE_ADDR");
    }

    #[test]
    fn empty_passphrase_is_ignored() {
        let source = StaticPayfastConfig::sandbox().with_passphrase("");
        assert!(source.passphrase().is_none());
    }

    #[test]
    fn builder_overrides_values() {
        let source = StaticPayfastConfig::new("12345", "key", "https://example.test/pay")
            .with_passphrase("secret")
            .with_ip_address_header("HTTP_X_FORWARDED_FOR");

        assert_eq!(source.merchant_id(), FieldValue::from("12345"));
        assert_eq!(source.action_url(), "https://example.test/pay");
        assert_eq!(
            source.passphrase().map(|p| p.expose_secret().clone()),
            Some("secret".to_string())
        );
        assert_eq!(source.ip_address_header(), "HTTP_X_FORWARDED_FOR");
    }
}
