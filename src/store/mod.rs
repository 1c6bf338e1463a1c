//! In-memory item storage module
//!
//! Provides the item record type and the ordered collection that owns it.
//! This module knows nothing about HTTP or request validation (loose coupling).

mod item;
mod memory;

pub use item::{Item, Price};
pub use memory::ItemStore;
