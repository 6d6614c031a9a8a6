//! Noisemix CLI library.
//!
//! The binary in `main.rs` parses arguments and dispatches into
//! [`commands`]; the command implementations live here so integration tests
//! can drive them directly.

pub mod commands;
