//! `shiplink-invoicing` — invoice records and their shipment/purchase
//! cross-references.
//!
//! The host store owns every row; this crate traverses preloaded relation
//! caches and compiles search predicates, nothing more.

pub mod invoice;
pub mod line;
pub mod relations;

pub use invoice::{Invoice, InvoiceType};
pub use line::{InvoiceLine, InvoiceLineStockMove};
pub use relations::{
    invoice_shipments, line_purchase, line_shipments, search_invoice_shipments,
    search_line_shipments, search_purchase, shipment_info,
};
