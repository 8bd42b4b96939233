//! ITN (Instant Transaction Notification) validation.
//!
//! A notification moves through a fixed sequence of checks:
//!
//! ```text
//! Received → FieldsChecked → SignatureVerified → OriginVerified → Accepted | Rejected
//! ```
//!
//! Every check before the final one is a hard failure: the notification is
//! refused with a typed [`PayfastError`]. Only a schema-valid, correctly signed
//! notification sent by a PayFast host reaches the outcome, where a payment
//! status other than `COMPLETE` is a business result rather than an error.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::constants::{
    is_valid_payfast_host, PAYMENT_RESULT_COMPLETE, PAYMENT_STATUS, PF_PAYMENT_ID, SIGNATURE,
};
use super::errors::PayfastError;
use super::fields::FieldSet;
use super::interaction::PAYMENT_NOTIFICATION_SCHEMA;
use super::signer::Signer;

/// Validation stage of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStage {
    Received,
    FieldsChecked,
    SignatureVerified,
    OriginVerified,
    /// Payment completed.
    Accepted,
    /// Valid notification for a payment that did not complete.
    Rejected,
}

impl StateMachine for NotificationStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use NotificationStage::*;
        matches!(
            (self, target),
            (Received, FieldsChecked)
                | (FieldsChecked, SignatureVerified)
                | (SignatureVerified, OriginVerified)
                | (OriginVerified, Accepted)
                | (OriginVerified, Rejected)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use NotificationStage::*;
        match self {
            Received => vec![FieldsChecked],
            FieldsChecked => vec![SignatureVerified],
            SignatureVerified => vec![OriginVerified],
            OriginVerified => vec![Accepted, Rejected],
            Accepted | Rejected => vec![],
        }
    }
}

/// Outcome of a fully validated notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationResult {
    accepted: bool,
    status: String,
    fields: FieldSet,
}

impl NotificationResult {
    /// True only for `COMPLETE` payments.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// The `payment_status` value, verbatim.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Notification fields without the signature.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn into_parts(self) -> (bool, String, FieldSet) {
        (self.accepted, self.status, self.fields)
    }
}

/// A notification that passed the field, signature and origin checks.
#[derive(Debug, Clone)]
pub struct PaymentNotification {
    fields: FieldSet,
    origin: Option<String>,
    stage: NotificationStage,
}

impl PaymentNotification {
    /// Runs all checks on a received notification.
    ///
    /// # Errors
    ///
    /// - `MissingField` / `UnexpectedField` - fields do not match the ITN schema
    /// - `TamperedTransaction` - the signature does not match the fields
    /// - `UntrustedOrigin` - the sender is not a PayFast host
    pub fn validate(
        signer: &dyn Signer,
        origin: Option<&str>,
        fields: FieldSet,
    ) -> Result<Self, PayfastError> {
        let mut notification = Self {
            fields,
            origin: origin.map(str::to_string),
            stage: NotificationStage::Received,
        };

        PAYMENT_NOTIFICATION_SCHEMA.check_fields(&notification.fields)?;
        notification.advance(NotificationStage::FieldsChecked);

        if !signer.verify(&notification.fields) {
            tracing::warn!(
                pf_payment_id = ?notification.fields.get(PF_PAYMENT_ID),
                "Notification signature mismatch"
            );
            return Err(PayfastError::TamperedTransaction);
        }
        notification.advance(NotificationStage::SignatureVerified);

        if !notification.origin.as_deref().is_some_and(is_valid_payfast_host) {
            tracing::warn!(origin = ?notification.origin, "Notification from untrusted origin");
            return Err(PayfastError::untrusted_origin(notification.origin.as_deref()));
        }
        notification.advance(NotificationStage::OriginVerified);

        Ok(notification)
    }

    pub fn stage(&self) -> NotificationStage {
        self.stage
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Derives the outcome from `payment_status`.
    pub fn process(mut self) -> NotificationResult {
        let status = self
            .fields
            .get(PAYMENT_STATUS)
            .map(|value| value.render())
            .unwrap_or_default();
        let accepted = status == PAYMENT_RESULT_COMPLETE;

        self.advance(if accepted {
            NotificationStage::Accepted
        } else {
            NotificationStage::Rejected
        });
        self.fields.remove(SIGNATURE);

        NotificationResult {
            accepted,
            status,
            fields: self.fields,
        }
    }

    fn advance(&mut self, next: NotificationStage) {
        debug_assert!(
            self.stage.can_transition_to(&next),
            "invalid notification stage transition {:?} -> {:?}",
            self.stage,
            next
        );
        self.stage = next;
    }
}
