use serde::{Deserialize, Serialize};

use shiplink_core::{Entity, Model, ModelRef, RecordId};
use shiplink_query::SqlType;

/// Stock move row.
///
/// `shipment` points at the owning shipment through a polymorphic reference;
/// at any time the reference has exactly one concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMove {
    pub id: RecordId,
    pub shipment: Option<ModelRef>,
    pub quantity: i64,
}

impl StockMove {
    /// Stored SQL type of the `shipment` reference column. Join conditions
    /// matching against it must cast ids to this type.
    pub const SHIPMENT_SQL_TYPE: SqlType = SqlType::Varchar;
}

impl Entity for StockMove {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Model for StockMove {
    const NAME: &'static str = "stock.move";
    const TABLE: &'static str = "stock_move";
}
