//! Implementation of the `hexport place-order` command.
//!
//! This is the composition root of the hexagonal demo: pick the concrete
//! store variant(s), inject them into the core `Order`, invoke placement.
//! No business logic lives here, and the core never learns which variant
//! it was given.

use tracing::{debug, instrument};

use hexport_adapters::{DatabaseStore, MockStore};
use hexport_core::{
    application::{Order, ports::OrderStore},
    domain::OrderRecord,
};

use crate::{
    cli::{AdapterKind, PlaceOrderArgs, global::GlobalArgs},
    error::CliResult,
};

/// Execute the `hexport place-order` command.
///
/// The default `both` wiring mirrors the classic demonstration: one order
/// through the database stand-in, one through the mock.
#[instrument(skip_all, fields(adapter = %args.adapter))]
pub fn execute(args: PlaceOrderArgs, global: GlobalArgs) -> CliResult<()> {
    match args.adapter {
        AdapterKind::Database => place_through(Box::new(DatabaseStore::new()), "database", &global),
        AdapterKind::Mock => place_through(Box::new(MockStore::new()), "mock", &global),
        AdapterKind::Both => {
            place_through(Box::new(DatabaseStore::new()), "database", &global)?;
            place_through(Box::new(MockStore::new()), "mock", &global)
        }
    }
}

/// Construct adapter → inject into domain object → invoke.
fn place_through(
    store: Box<dyn OrderStore>,
    label: &'static str,
    global: &GlobalArgs,
) -> CliResult<()> {
    let record = OrderRecord::new();
    let id = record.id();

    let order = Order::new(record, store);
    let accepted = order.place();

    debug!(order = %id, store = label, accepted, "order placed");
    if !global.quiet {
        let verdict = if accepted { "accepted" } else { "rejected" };
        println!("order {id} via {label} store: {verdict}");
    }

    Ok(())
}
