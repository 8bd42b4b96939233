//! PayFast domain module.
//!
//! Builds signed payment request forms and validates ITN callbacks.
//!
//! # Module Structure
//!
//! - `constants` - Field names, gateway hosts and URLs
//! - `fields` - Ordered field sets and scalar values
//! - `signer` - Signature string construction and MD5 signing
//! - `interaction` - Field schemas and the payment form request
//! - `notification` - ITN validation stages and outcome
//! - `gateway` - Gateway entry point tying the above together
//! - `errors` - Typed validation and configuration failures

pub mod constants;
mod errors;
mod fields;
mod gateway;
mod interaction;
mod notification;
mod signer;

pub use errors::PayfastError;
pub use fields::{FieldSet, FieldValue};
pub use gateway::{Gateway, GatewaySettings};
pub use interaction::{
    FieldSchema, FormField, PaymentFormRequest, PAYMENT_FORM_SCHEMA, PAYMENT_NOTIFICATION_SCHEMA,
};
pub use notification::{NotificationResult, NotificationStage, PaymentNotification};
pub use signer::{signature_string, Md5Signer, Signer, REQUEST_HASH_KEYS, RESPONSE_HASH_KEYS};
