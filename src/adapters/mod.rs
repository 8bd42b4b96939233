//! Adapters - Implementations of ports and inbound endpoints.

pub mod http;
pub mod settings;

pub use http::{payfast_router, PayfastAppState};
pub use settings::{StaticPayfastConfig, WebIntegrationConfig};
