//! Configuration source port for PayFast credentials.
//!
//! The gateway never reads credentials from ambient state: callers hand it a
//! config source, which is queried afresh for every payment form and every
//! notification. Implementations may return different credentials per call,
//! e.g. per tenant, as long as reads are safe from multiple threads.

use secrecy::SecretString;

use crate::domain::payfast::FieldValue;

/// Port for PayFast merchant configuration.
pub trait PayfastConfigSource: Send + Sync {
    /// PayFast merchant identifier.
    fn merchant_id(&self) -> FieldValue;

    /// PayFast merchant key.
    fn merchant_key(&self) -> SecretString;

    /// URL the payment form is posted to.
    fn action_url(&self) -> String;

    /// Passphrase salting signatures, if any.
    fn passphrase(&self) -> Option<SecretString>;

    /// Request header holding the notification sender address.
    ///
    /// `REMOTE_ADDR` designates the direct connection address.
    fn ip_address_header(&self) -> String;
}
