//! Core domain layer for Hexport.
//!
//! This module contains pure order data with ZERO infrastructure
//! dependencies. All persistence concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **No adapter knowledge**: The domain never learns which store variant
//!   ends up holding its records

pub mod order;

// Re-exports for convenience
pub use order::{OrderId, OrderRecord};
