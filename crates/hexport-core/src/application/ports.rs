//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `hexport-adapters` crate provides implementations.

#[cfg(test)]
use mockall::automock;

use crate::domain::OrderRecord;

/// Port for order persistence.
///
/// Implemented by:
/// - `hexport_adapters::order_store::DatabaseStore` (production stand-in)
/// - `hexport_adapters::order_store::MockStore` (testing/demo)
///
/// ## Design Notes
///
/// - `save` reports success as a plain boolean. That is the whole status
///   contract of this demo; there is no retry, timeout, or error channel,
///   and callers are not required to act on a `false` result.
/// - Implementations receive the shared [`OrderRecord`] shape and must not
///   require any richer order representation.
#[cfg_attr(test, automock)]
pub trait OrderStore: Send + Sync {
    /// Persist one order, returning whether the store accepted it.
    fn save(&self, order: &OrderRecord) -> bool;
}
