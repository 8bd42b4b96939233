//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Configuration Ports
//!
//! - `PayfastConfigSource` - Merchant credentials, passphrase and action URL

mod config_source;

pub use config_source::PayfastConfigSource;
