//! Infrastructure adapters for Hexport.
//!
//! This crate implements the ports defined in
//! `hexport-core::application::ports`. It contains the interchangeable
//! store variants; the application core never sees which one it was given.

pub mod order_store;

// Re-export commonly used adapters
pub use order_store::{DatabaseStore, MockStore};
