//! Console-logging mock order store.

use std::sync::{Arc, RwLock};

use hexport_core::{application::ports::OrderStore, domain::OrderRecord};

/// Mock store for demos and tests.
///
/// Persists nothing. Every `save` prints its telltale console line,
/// records the order in memory, and reports success. Clones share the
/// same call log, so a test can keep a handle while the boxed adapter is
/// moved into an `Order`.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    saved: Arc<RwLock<Vec<OrderRecord>>>,
}

impl MockStore {
    /// Create a new mock store with an empty call log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders handed to `save` so far, in call order (testing helper).
    pub fn saved_orders(&self) -> Vec<OrderRecord> {
        self.saved.read().unwrap().clone()
    }

    /// Number of `save` invocations (testing helper).
    pub fn call_count(&self) -> usize {
        self.saved.read().unwrap().len()
    }
}

impl OrderStore for MockStore {
    fn save(&self, order: &OrderRecord) -> bool {
        println!("You've been mocked!");
        self.saved.write().unwrap().push(order.clone());
        true
    }
}
