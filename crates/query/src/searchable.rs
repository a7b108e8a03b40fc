//! Per-model search contract.

use shiplink_core::Model;

use crate::clause::{Clause, Operator, Value};
use crate::error::QueryError;
use crate::expr::{Expr, Table};

/// Search surface a model exposes to cross-reference searchers.
///
/// This is the record store's per-type contract: a table expression, a
/// compiler from one clause to a condition on that table, and the rec-name
/// rewrite used for free-text lookups.
pub trait Searchable: Model {
    /// Table expression for this model.
    fn table() -> Table
    where
        Self: Sized,
    {
        Table::of::<Self>()
    }

    /// Rewrite a `rec_name` clause onto this model's identifying fields.
    ///
    /// Clauses already naming a concrete field pass through unchanged.
    fn search_rec_name(clause: Clause) -> Clause;

    /// Compile one clause into a condition over this model's table.
    fn search_domain(clause: &Clause) -> Result<(Table, Expr), QueryError>;
}

/// Build the condition `column OP value` once a clause's field has been
/// mapped to a column. `in`/`not in` with an id list expand to placeholder
/// lists; subquery values become `IN (SELECT ...)`.
pub fn compile_clause(table: &Table, column: &str, clause: &Clause) -> Expr {
    let lhs = table.col(column);
    match (clause.op, &clause.value) {
        (Operator::In | Operator::NotIn, Value::Ids(ids)) => Expr::InList {
            expr: Box::new(lhs),
            values: ids.iter().map(|id| Value::Int(id.as_i64())).collect(),
            negated: clause.op == Operator::NotIn,
        },
        (Operator::In | Operator::NotIn, Value::Subquery(query)) => Expr::InSubquery {
            expr: Box::new(lhs),
            query: query.clone(),
            negated: clause.op == Operator::NotIn,
        },
        (op, value) => Expr::binary(op, lhs, Expr::Param(value.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiplink_core::{Entity, RecordId};

    struct Shipment {
        id: RecordId,
    }

    impl Entity for Shipment {
        fn id(&self) -> RecordId {
            self.id
        }
    }

    impl Model for Shipment {
        const NAME: &'static str = "stock.shipment.in";
        const TABLE: &'static str = "stock_shipment_in";
    }

    #[test]
    fn searchable_table_defaults_to_the_model_table() {
        let shipment = Shipment {
            id: RecordId::new(7),
        };
        assert_eq!(shipment.id(), RecordId::new(7));
        assert_eq!(Table::of::<Shipment>().name(), "stock_shipment_in");
    }

    #[test]
    fn compiles_comparison_clause_to_bound_condition() {
        let table = Table::of::<Shipment>();
        let clause = Clause::new("code", Operator::Eq, Value::Text("SHP-001".into()));
        let expr = compile_clause(&table, "code", &clause);
        let mut sql = String::new();
        let mut params = Vec::new();
        expr.render(&mut sql, &mut params);
        assert_eq!(sql, "(\"stock_shipment_in\".\"code\" = ?)");
        assert_eq!(params, vec![Value::Text("SHP-001".into())]);
    }

    #[test]
    fn compiles_id_list_clause_to_in_list() {
        let table = Table::of::<Shipment>();
        let clause = Clause::new(
            "id",
            Operator::NotIn,
            Value::Ids(vec![RecordId::new(7), RecordId::new(9)]),
        );
        let expr = compile_clause(&table, "id", &clause);
        let mut sql = String::new();
        let mut params = Vec::new();
        expr.render(&mut sql, &mut params);
        assert_eq!(sql, "(\"stock_shipment_in\".\"id\" NOT IN (?, ?))");
        assert_eq!(params, vec![Value::Int(7), Value::Int(9)]);
    }
}
