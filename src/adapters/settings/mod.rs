//! Settings adapters - implementations of `PayfastConfigSource`.

mod static_config;
mod web_integration;

pub use static_config::StaticPayfastConfig;
pub use web_integration::WebIntegrationConfig;
