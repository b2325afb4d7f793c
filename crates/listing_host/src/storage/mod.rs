//! Persistent storage contracts.

pub mod key_value;
