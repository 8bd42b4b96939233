//! Application layer - Use cases over the PayFast domain.
//!
//! This layer reads configuration through ports and drives the gateway.

pub mod payfast;

pub use payfast::{OrderPaymentRequest, PayfastFacade};
