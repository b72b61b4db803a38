//! Centralized user-facing text.
//!
//! Every string the application prints lives in [`Message`]; the macros
//! in [`macros`] route output to the console or the tracing system.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
