//! Order service HTTP API module.
pub mod error;
pub mod openapi;
pub mod orders;
pub mod system;
pub mod types;
