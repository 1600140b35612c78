//! The core module defines the business logic of roster.
//! It provides the traits and models upstream adapters need to implement.

pub mod logo;
pub mod model;
pub mod password;
pub mod repo;
pub mod service;
