//! PayFast gateway: payment form construction and notification handling.

use std::fmt;
use std::sync::Arc;

use super::constants::{ACTION_URL, MERCHANT_ID, MERCHANT_KEY, SIGNER};
use super::errors::PayfastError;
use super::fields::{FieldSet, FieldValue};
use super::interaction::{FormField, PaymentFormRequest};
use super::notification::{NotificationResult, PaymentNotification};
use super::signer::Signer;

/// Parameters used to initialize a [`Gateway`].
///
/// `merchant_id`, `merchant_key`, `signer` and `action_url` are mandatory.
#[derive(Clone, Default)]
pub struct GatewaySettings {
    pub merchant_id: Option<FieldValue>,
    pub merchant_key: Option<String>,
    pub signer: Option<Arc<dyn Signer>>,
    pub action_url: Option<String>,
    pub host_ip: Option<String>,
}

impl GatewaySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merchant_id(mut self, merchant_id: impl Into<FieldValue>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    pub fn merchant_key(mut self, merchant_key: impl Into<String>) -> Self {
        self.merchant_key = Some(merchant_key.into());
        self
    }

    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn action_url(mut self, action_url: impl Into<String>) -> Self {
        self.action_url = Some(action_url.into());
        self
    }

    pub fn host_ip(mut self, host_ip: impl Into<String>) -> Self {
        self.host_ip = Some(host_ip.into());
        self
    }
}

impl fmt::Debug for GatewaySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewaySettings")
            .field("merchant_id", &self.merchant_id)
            .field("merchant_key", &self.merchant_key.as_ref().map(|_| "[REDACTED]"))
            .field("signer", &self.signer.as_ref().map(|_| "dyn Signer"))
            .field("action_url", &self.action_url)
            .field("host_ip", &self.host_ip)
            .finish()
    }
}

/// Entry point for building payment forms and handling ITN callbacks.
#[derive(Clone)]
pub struct Gateway {
    merchant_id: FieldValue,
    merchant_key: String,
    signer: Arc<dyn Signer>,
    action_url: String,
    host_ip: Option<String>,
}

impl Gateway {
    /// Creates a gateway from its settings.
    ///
    /// # Errors
    ///
    /// Returns `PayfastError::Configuration` naming every missing mandatory
    /// parameter.
    pub fn new(settings: GatewaySettings) -> Result<Self, PayfastError> {
        let mut missing = Vec::new();
        if settings.merchant_id.is_none() {
            missing.push(MERCHANT_ID);
        }
        if settings.merchant_key.is_none() {
            missing.push(MERCHANT_KEY);
        }
        if settings.signer.is_none() {
            missing.push(SIGNER);
        }
        if settings.action_url.is_none() {
            missing.push(ACTION_URL);
        }

        match settings {
            GatewaySettings {
                merchant_id: Some(merchant_id),
                merchant_key: Some(merchant_key),
                signer: Some(signer),
                action_url: Some(action_url),
                host_ip,
            } => Ok(Self {
                merchant_id,
                merchant_key,
                signer,
                action_url,
                host_ip,
            }),
            _ => {
                tracing::error!(missing = ?missing, "Payfast gateway is not configured");
                Err(PayfastError::configuration(missing))
            }
        }
    }

    pub fn action_url(&self) -> &str {
        &self.action_url
    }

    pub fn merchant_id(&self) -> &FieldValue {
        &self.merchant_id
    }

    pub fn host_ip(&self) -> Option<&str> {
        self.host_ip.as_deref()
    }

    /// Returns the hidden fields of the payment form to POST to PayFast.
    ///
    /// Merchant credentials override any caller-supplied value; the signature
    /// is the last field.
    pub fn build_payment_form_fields(&self, mut fields: FieldSet) -> Result<Vec<FormField>, PayfastError> {
        fields.insert(MERCHANT_ID, self.merchant_id.clone());
        fields.insert(MERCHANT_KEY, self.merchant_key.clone());

        let request = PaymentFormRequest::new(self.signer.as_ref(), fields)?;
        Ok(request.build_form_fields())
    }

    /// Validates an ITN and derives its outcome.
    ///
    /// `ip_address` is the resolved sender of the notification, `None` when it
    /// could not be determined.
    pub fn handle_notification(
        &self,
        ip_address: Option<&str>,
        fields: FieldSet,
    ) -> Result<NotificationResult, PayfastError> {
        let notification = PaymentNotification::validate(self.signer.as_ref(), ip_address, fields)?;
        Ok(notification.process())
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("merchant_id", &self.merchant_id)
            .field("action_url", &self.action_url)
            .field("host_ip", &self.host_ip)
            .finish_non_exhaustive()
    }
}
