//! Order service data model.
//!
//! # Purpose
//! Re-exports the order records shared by the workflow, store, and HTTP API.
mod order;

pub use order::{NewOrder, Order};
