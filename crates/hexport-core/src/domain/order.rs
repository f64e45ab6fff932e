//! The order value objects.
//!
//! An [`OrderRecord`] is the minimal, explicit representation of a customer
//! order that crosses the port boundary. Every store adapter accepts this
//! one shape; nothing about a concrete storage backend leaks into it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Identity ──────────────────────────────────────────────────────────────────

/// Unique identifier for a single order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Record ────────────────────────────────────────────────────────────────────

/// The order-shaped value handed to a store's `save` operation.
///
/// Deliberately minimal: an identity and a placement timestamp. The demo
/// teaches substitutability of stores, not order modelling, so no line
/// items, totals, or customer data exist here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    id: OrderId,
    placed_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Create a record for a new order, stamped with the current time.
    pub fn new() -> Self {
        Self {
            id: OrderId::new(),
            placed_at: Utc::now(),
        }
    }

    pub const fn id(&self) -> OrderId {
        self.id
    }

    pub const fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

impl Default for OrderRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order {}", self.id)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_are_unique() {
        assert_ne!(OrderId::new(), OrderId::new());
    }

    #[test]
    fn record_display_includes_id() {
        let record = OrderRecord::new();
        assert!(record.to_string().contains(&record.id().to_string()));
    }

    #[test]
    fn record_keeps_its_identity_when_cloned() {
        let record = OrderRecord::new();
        let clone = record.clone();
        assert_eq!(record.id(), clone.id());
        assert_eq!(record, clone);
    }
}
