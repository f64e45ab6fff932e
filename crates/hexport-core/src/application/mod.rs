//! Application layer for Hexport.
//!
//! This layer contains:
//! - **Order**: the place-order use case, with its store injected at
//!   construction
//! - **Ports**: interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer but contains no
//! storage logic itself. Concrete stores live in `hexport-adapters`.

pub mod order;
pub mod ports;

// Re-export the use case
pub use order::Order;

// Re-export port traits (for adapter implementation)
pub use ports::OrderStore;
