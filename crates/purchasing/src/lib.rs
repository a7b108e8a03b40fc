//! `shiplink-purchasing` — purchase records referenced from invoice lines.

pub mod purchase;

pub use purchase::{Purchase, PurchaseLine};
