//! HTTP adapter for PayFast callbacks.
//!
//! - `POST /payfast/notify` - Instant Transaction Notification
//! - `GET|POST /payfast/cancel` - Buyer cancelled the payment

mod handlers;
mod origin;
mod routes;

pub use handlers::{handle_payfast_notification, handle_payment_cancel, PayfastAppState};
pub use origin::resolve_origin_ip;
pub use routes::{payfast_router, payfast_routes};
