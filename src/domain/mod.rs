//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (state machine)
//! - `payfast` - Signing, payment form requests and ITN validation

pub mod foundation;
pub mod payfast;
