//! Module containing concrete implementations from the [core](crate::core) module.

/// Logo storage implementations.
pub mod logo;

/// Repository implementations.
pub mod repo;

/// Application state configuration.
pub mod state;

/// HTTP server implementation.
#[cfg(feature = "http")]
pub mod server;
