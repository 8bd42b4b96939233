//! Foundation module - Shared domain primitives.

mod state_machine;

pub use state_machine::{InvalidTransition, StateMachine};
