use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shiplink_core::{Entity, Model, RecordId};

use crate::line::InvoiceLine;

/// Invoice kind.
///
/// Supplier shipment cross-references only carry meaning for the `In*`
/// kinds; the resolvers still run on the others and find nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    InInvoice,
    InCreditNote,
    OutInvoice,
    OutCreditNote,
}

impl InvoiceType {
    /// Whether this kind is supplier-side (received from a supplier).
    pub fn is_supplier(&self) -> bool {
        matches!(self, InvoiceType::InInvoice | InvoiceType::InCreditNote)
    }
}

/// Invoice row with its preloaded lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: RecordId,
    pub invoice_type: InvoiceType,
    pub invoice_date: Option<NaiveDate>,
    pub lines: Vec<InvoiceLine>,
}

impl Entity for Invoice {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Model for Invoice {
    const NAME: &'static str = "account.invoice";
    const TABLE: &'static str = "account_invoice";
}
