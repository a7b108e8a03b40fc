//! `shiplink-stock` — stock moves and inbound shipment records.
//!
//! Rows are loaded (and owned) by the host store; these types are the
//! read-side shapes the cross-reference resolvers traverse and search.

pub mod shipment;
pub mod stock_move;

pub use shipment::{ShipmentIn, ShipmentInReturn};
pub use stock_move::StockMove;
