//! Hexport Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Hexport
//! order-placement demo, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          hexport-cli (CLI)              │
//! │        (Composition Root)               │
//! └──────────────────┬──────────────────────┘
//!                    │ wires
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Layer                │
//! │   (Order: place-order use case)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: OrderStore)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    hexport-adapters (Infrastructure)    │
//! │      (DatabaseStore, MockStore)         │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Data)          │
//! │        (OrderId, OrderRecord)           │
//! │       No External Dependencies          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hexport_core::{
//!     application::{Order, ports::OrderStore},
//!     domain::OrderRecord,
//! };
//!
//! # fn wire(store: Box<dyn OrderStore>) {
//! // 1. Construct the order with an injected adapter
//! let order = Order::new(OrderRecord::new(), store);
//!
//! // 2. Place it (consumes the order; calls the adapter exactly once)
//! let accepted = order.place();
//! # let _ = accepted;
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (use case + ports)
pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Order, ports::OrderStore};
    pub use crate::domain::{OrderId, OrderRecord};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
