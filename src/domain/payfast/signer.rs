//! Request and ITN signature generation.
//!
//! The fields of a request or notification are turned into a url-encoded
//! query string, the "signature string", following a fixed key order. The
//! string is optionally salted with the merchant passphrase and hashed.
//! PayFast computes the same hash independently, so the key order, the
//! inclusion filter and the encoding must match the gateway byte for byte.
//!
//! MD5 is the only signature method PayFast offers today. Other algorithms
//! would be further [`Signer`] implementations.

use md5::{Digest, Md5};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use super::constants::*;
use super::fields::FieldSet;

/// Signed keys of an outbound payment request, in signing order.
pub const REQUEST_HASH_KEYS: [&str; 15] = [
    MERCHANT_ID,
    MERCHANT_KEY,
    RETURN_URL,
    CANCEL_URL,
    NOTIFY_URL,
    NAME_FIRST,
    NAME_LAST,
    EMAIL_ADDRESS,
    CELL_NUMBER,
    M_PAYMENT_ID,
    AMOUNT,
    ITEM_NAME,
    ITEM_DESCRIPTION,
    EMAIL_CONFIRMATION,
    CONFIRMATION_ADDRESS,
];

/// Signed keys of an ITN notification, in signing order.
pub const RESPONSE_HASH_KEYS: [&str; 12] = [
    M_PAYMENT_ID,
    PF_PAYMENT_ID,
    PAYMENT_STATUS,
    ITEM_NAME,
    ITEM_DESCRIPTION,
    AMOUNT_GROSS,
    AMOUNT_FEE,
    AMOUNT_NET,
    NAME_FIRST,
    NAME_LAST,
    EMAIL_ADDRESS,
    MERCHANT_ID,
];

/// Signing capability shared by all signature methods.
pub trait Signer: Send + Sync {
    /// Signs outbound request fields and returns the signature.
    fn sign(&self, fields: &FieldSet) -> String;

    /// Checks the `signature` field of a notification against its other fields.
    ///
    /// The `signature` field never takes part in the recomputed hash. A
    /// mismatch is a normal `false`, not an error.
    fn verify(&self, fields: &FieldSet) -> bool;

    /// Hashes a signature string, salting it with the passphrase if one is set.
    fn generate_hash(&self, signature_string: &str) -> String;
}

/// Builds the signature string for `fields` following `key_order`.
///
/// A key contributes only if it is present and its value is truthy, so a
/// literal `0` amount or cell number is left out of the string.
pub fn signature_string(fields: &FieldSet, key_order: &[&str]) -> String {
    key_order
        .iter()
        .filter_map(|key| {
            fields
                .get(key)
                .filter(|value| value.is_truthy())
                .map(|value| format!("{}={}", quote_plus(key), quote_plus(&value.render())))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Form-urlencodes a single key or value: space becomes `+`.
fn quote_plus(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// Percent-encodes the passphrase: space becomes `%20`, `/` stays literal.
fn quote_passphrase(value: &str) -> String {
    urlencoding::encode(value).replace("%2F", "/")
}

/// MD5 signer, optionally salted with the merchant passphrase.
#[derive(Debug, Clone, Default)]
pub struct Md5Signer {
    passphrase: Option<SecretString>,
}

impl Md5Signer {
    /// Creates a signer without a passphrase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a signer salted with `passphrase`.
    ///
    /// An empty passphrase is the same as no passphrase.
    pub fn with_passphrase(passphrase: Option<SecretString>) -> Self {
        let passphrase = passphrase.filter(|secret| !secret.expose_secret().is_empty());
        Self { passphrase }
    }

    pub fn has_passphrase(&self) -> bool {
        self.passphrase.is_some()
    }
}

impl Signer for Md5Signer {
    fn sign(&self, fields: &FieldSet) -> String {
        let signature_string = signature_string(fields, &REQUEST_HASH_KEYS);
        tracing::debug!(signature_string = %signature_string, "Signing payment request");
        self.generate_hash(&signature_string)
    }

    fn verify(&self, fields: &FieldSet) -> bool {
        let Some(response_signature) = fields.get(SIGNATURE).map(|value| value.render()) else {
            tracing::debug!("Notification carries no signature");
            return false;
        };

        let signature_string = signature_string(fields, &RESPONSE_HASH_KEYS);
        tracing::debug!(signature_string = %signature_string, "Verifying notification signature");
        let expected = self.generate_hash(&signature_string);

        expected.as_bytes().ct_eq(response_signature.as_bytes()).into()
    }

    fn generate_hash(&self, signature_string: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(signature_string.as_bytes());
        if let Some(passphrase) = &self.passphrase {
            let salt = format!("&{}={}", PASSPHRASE, quote_passphrase(passphrase.expose_secret()));
            hasher.update(salt.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}
