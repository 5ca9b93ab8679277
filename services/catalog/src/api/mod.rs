//! Catalog service HTTP API module.
pub mod error;
pub mod openapi;
pub mod products;
pub mod system;
pub mod types;
