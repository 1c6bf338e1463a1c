//! Grocery list - a small in-memory HTTP service for named grocery items
//!
//! Layers, from the bottom up:
//! - `store`: the ordered in-memory item collection
//! - `service`: validation and the five item operations
//! - `web`: axum routes mapping HTTP requests onto the service
//! - `config`: environment-driven settings for the binary

pub mod config;
pub mod service;
pub mod store;
pub mod web;

/// Re-export commonly used types
pub use config::{Config, RunMode};
pub use service::{ItemError, ItemPayload, ItemResult, ItemService};
pub use store::{Item, ItemStore, Price};
