//! PayFast Gateway - PayFast checkout integration
//!
//! This crate builds signed PayFast payment forms and validates Instant
//! Transaction Notifications (ITN) posted back by the gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
