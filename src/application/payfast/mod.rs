//! PayFast checkout use cases.

mod facade;
mod order_request;

pub use facade::PayfastFacade;
pub use order_request::OrderPaymentRequest;
