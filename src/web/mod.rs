//! Web interface module
//!
//! Exposes the item service over HTTP with JSON bodies.

mod handlers;
mod server;

pub use handlers::{AddedResponse, DeletedResponse, HealthResponse, ItemsResponse, UpdatedResponse};
pub use server::{router, run_web_server, shutdown_signal};
