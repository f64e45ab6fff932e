//! Command handlers, one module per subcommand.

pub mod place_order;
pub mod serve;
