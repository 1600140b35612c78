/// Concrete implementations of the [core] module.
pub mod app;

/// Command line interface.
pub mod cli;

/// Application starting arguments and configuration.
pub mod config;

/// Core business logic.
pub mod core;

/// Error types.
pub mod error;

/// Fixed page size for every paginated listing.
pub const PER_PAGE: usize = 10;
