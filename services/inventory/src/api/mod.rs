//! Inventory service HTTP API module.
pub mod error;
pub mod inventory;
pub mod openapi;
pub mod system;
pub mod types;
