use serde::{Deserialize, Serialize};

use shiplink_core::{Entity, Model, ModelRef, RecordId};
use shiplink_query::{SqlType, Table};
use shiplink_stock::StockMove;

/// Invoice line row with its preloaded stock-move cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub id: RecordId,
    /// Owning invoice.
    pub invoice: RecordId,
    /// Where this line came from (a purchase line, when invoiced from a
    /// purchase).
    pub origin: Option<ModelRef>,
    /// Second-hop relation cache: the moves linked to this line.
    pub stock_moves: Vec<StockMove>,
}

impl InvoiceLine {
    /// Stored SQL type of the `origin` reference column.
    pub const ORIGIN_SQL_TYPE: SqlType = SqlType::Varchar;
}

impl Entity for InvoiceLine {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Model for InvoiceLine {
    const NAME: &'static str = "account.invoice.line";
    const TABLE: &'static str = "account_invoice_line";
}

/// Link table between invoice lines and stock moves.
///
/// Pure association: only its table expression is ever needed, the rows
/// themselves stay inside the host store.
pub struct InvoiceLineStockMove;

impl InvoiceLineStockMove {
    pub const TABLE: &'static str = "account_invoice_line_stock_move";

    pub fn table() -> Table {
        Table::new(Self::TABLE)
    }
}
