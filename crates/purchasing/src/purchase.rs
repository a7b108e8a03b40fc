use serde::{Deserialize, Serialize};

use shiplink_core::{Entity, Model, RecordId};

/// Purchase order header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: RecordId,
    pub number: String,
}

impl Entity for Purchase {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Model for Purchase {
    const NAME: &'static str = "purchase.purchase";
    const TABLE: &'static str = "purchase_purchase";
}

/// One purchase order line. Invoice lines created from a purchase carry a
/// polymorphic `origin` reference pointing here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub id: RecordId,
    /// Owning purchase order.
    pub purchase: RecordId,
}

impl Entity for PurchaseLine {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Model for PurchaseLine {
    const NAME: &'static str = "purchase.line";
    const TABLE: &'static str = "purchase_line";
}
