/// OpenAPI documentation.
pub mod api;

/// Request schemas used only for documentation.
pub mod dto;

/// One-shot notifications carried in a private cookie.
pub mod flash;

/// HTTP routes and handlers.
pub mod router;

/// Page responses.
pub mod view;
