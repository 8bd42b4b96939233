//! PayfastFacade - entry point for hosts integrating PayFast checkout.

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::domain::payfast::{
    FieldSet, FormField, Gateway, GatewaySettings, Md5Signer, NotificationResult, PayfastError,
};
use crate::ports::PayfastConfigSource;

/// Builds payment forms and handles ITN callbacks against a config source.
///
/// The config source is read on every call, so credential changes take effect
/// without rebuilding the facade.
#[derive(Clone)]
pub struct PayfastFacade {
    config: Arc<dyn PayfastConfigSource>,
}

impl PayfastFacade {
    pub fn new(config: Arc<dyn PayfastConfigSource>) -> Self {
        Self { config }
    }

    /// URL the payment form must be posted to.
    pub fn form_action(&self) -> String {
        self.config.action_url()
    }

    /// Header the notification sender address is read from.
    pub fn ip_address_header(&self) -> String {
        self.config.ip_address_header()
    }

    /// Signed hidden fields for a payment form.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` or `UnexpectedField` when `fields` do not match
    /// the payment form schema.
    pub fn build_payment_form_fields(&self, fields: FieldSet) -> Result<Vec<FormField>, PayfastError> {
        self.gateway()?.build_payment_form_fields(fields)
    }

    /// Validates an ITN posted by PayFast.
    ///
    /// # Errors
    ///
    /// Returns the first failed check: schema, signature, then origin.
    pub fn handle_notification_request(
        &self,
        origin_ip: Option<&str>,
        fields: FieldSet,
    ) -> Result<NotificationResult, PayfastError> {
        self.gateway()?.handle_notification(origin_ip, fields)
    }

    fn gateway(&self) -> Result<Gateway, PayfastError> {
        let signer = Md5Signer::with_passphrase(self.config.passphrase());
        let settings = GatewaySettings::new()
            .merchant_id(self.config.merchant_id())
            .merchant_key(self.config.merchant_key().expose_secret().as_str())
            .signer(Arc::new(signer))
            .action_url(self.config.action_url());

        Gateway::new(settings)
    }
}

impl std::fmt::Debug for PayfastFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayfastFacade")
            .field("action_url", &self.config.action_url())
            .finish_non_exhaustive()
    }
}
