//! Notification consumer library crate.
//!
//! Exposes the order-event listener, configuration, and observability setup
//! for use by the binary and tests.
pub mod config;
pub mod listener;
pub mod observability;
