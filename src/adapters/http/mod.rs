//! HTTP adapters - endpoints PayFast and buyers call back into.

pub mod payfast;

pub use payfast::{payfast_router, resolve_origin_ip, PayfastAppState};
