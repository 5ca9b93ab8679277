//! Orders service library crate.
//!
//! # Purpose
//! Exposes the order placement API surface, workflow, configuration, and
//! storage implementations for use by the binary and tests.
//!
//! # Notes
//! Module boundaries mirror the HTTP API, the placement workflow, and the
//! storage backends for clarity.
pub mod api;
pub mod app;
pub mod config;
pub mod inventory;
pub mod model;
pub mod observability;
pub mod store;
pub mod workflow;
