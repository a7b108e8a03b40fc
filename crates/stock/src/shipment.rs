//! Inbound shipments: supplier deliveries and supplier returns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shiplink_core::{Entity, Model, RecordId};
use shiplink_query::{Clause, Expr, QueryError, Searchable, Table, compile_clause};

/// Supplier shipment (goods inbound from a supplier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentIn {
    pub id: RecordId,
    /// Shipment code; doubles as the record's display name.
    pub code: String,
    pub effective_date: Option<NaiveDate>,
}

/// Supplier return shipment (goods sent back to a supplier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentInReturn {
    pub id: RecordId,
    pub code: String,
    pub effective_date: Option<NaiveDate>,
}

impl Entity for ShipmentIn {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Model for ShipmentIn {
    const NAME: &'static str = "stock.shipment.in";
    const TABLE: &'static str = "stock_shipment_in";
}

impl Entity for ShipmentInReturn {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Model for ShipmentInReturn {
    const NAME: &'static str = "stock.shipment.in.return";
    const TABLE: &'static str = "stock_shipment_in_return";
}

/// Free-text lookups on shipments match the code.
fn rec_name_to_code(mut clause: Clause) -> Clause {
    if clause.field == "rec_name" {
        clause.field = "code".to_string();
    }
    clause
}

fn shipment_domain<M: Model>(clause: &Clause) -> Result<(Table, Expr), QueryError> {
    let table = Table::of::<M>();
    let column = match clause.field.as_str() {
        "id" => "id",
        "code" => "code",
        "effective_date" => "effective_date",
        _ => {
            return Err(QueryError::UnknownField {
                model: M::NAME,
                field: clause.field.clone(),
            });
        }
    };
    let condition = compile_clause(&table, column, clause);
    Ok((table, condition))
}

impl Searchable for ShipmentIn {
    fn search_rec_name(clause: Clause) -> Clause {
        rec_name_to_code(clause)
    }

    fn search_domain(clause: &Clause) -> Result<(Table, Expr), QueryError> {
        shipment_domain::<Self>(clause)
    }
}

impl Searchable for ShipmentInReturn {
    fn search_rec_name(clause: Clause) -> Clause {
        rec_name_to_code(clause)
    }

    fn search_domain(clause: &Clause) -> Result<(Table, Expr), QueryError> {
        shipment_domain::<Self>(clause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiplink_query::{Operator, Value};

    #[test]
    fn rec_name_clause_maps_to_code() {
        let clause = Clause::new("rec_name", Operator::Like, Value::Text("SHP-%".into()));
        let rewritten = ShipmentIn::search_rec_name(clause);
        assert_eq!(rewritten.field, "code");
        assert_eq!(rewritten.op, Operator::Like);
    }

    #[test]
    fn concrete_field_clause_passes_through() {
        let clause = Clause::new("effective_date", Operator::Ge, Value::Int(0));
        let rewritten = ShipmentInReturn::search_rec_name(clause.clone());
        assert_eq!(rewritten, clause);
    }

    #[test]
    fn domain_compiles_onto_own_table() {
        let clause = Clause::new("code", Operator::Eq, Value::Text("RET-004".into()));
        let (table, condition) = ShipmentInReturn::search_domain(&clause).unwrap();
        assert_eq!(table.name(), "stock_shipment_in_return");
        let (sql, params) = shiplink_query::Select::from(table.clone())
            .column(table.col("id"))
            .filter(condition)
            .build();
        assert!(sql.ends_with("WHERE (\"stock_shipment_in_return\".\"code\" = ?)"));
        assert_eq!(params, vec![Value::Text("RET-004".into())]);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let clause = Clause::new("warehouse", Operator::Eq, Value::Int(3));
        let err = ShipmentIn::search_domain(&clause).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownField {
                model: "stock.shipment.in",
                field: "warehouse".to_string(),
            }
        );
    }
}
