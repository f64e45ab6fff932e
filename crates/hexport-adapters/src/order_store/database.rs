//! Database-backed order store.
//!
//! Stand-in only: the demo never defines real persistence behavior, so
//! this adapter records the attempt in the log and reports success. A
//! production system would replace the body of `save` with an actual
//! database write.

use tracing::info;

use hexport_core::{application::ports::OrderStore, domain::OrderRecord};

/// Production-shaped store implementation.
#[derive(Debug, Clone, Copy)]
pub struct DatabaseStore;

impl DatabaseStore {
    /// Create a new database store adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DatabaseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for DatabaseStore {
    fn save(&self, order: &OrderRecord) -> bool {
        // No database is attached in this demo; accept unconditionally.
        info!(order = %order.id(), "saving order to database (stand-in)");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_store_accepts_orders() {
        let store = DatabaseStore::new();
        assert!(store.save(&OrderRecord::new()));
    }
}
