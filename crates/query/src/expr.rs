//! Table expressions: the fragments searchers compose into join conditions.

use serde::{Deserialize, Serialize};

use shiplink_core::Model;

use crate::clause::{Operator, Value};
use crate::select::Select;

/// A table in the host schema, referenced by name.
///
/// Rendering qualifies columns with the table name; the join chains built
/// here never reference one table twice, so no alias generation is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    name: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Table expression of a model.
    pub fn of<M: Model>() -> Self {
        Self::new(M::TABLE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column reference on this table.
    pub fn col(&self, name: impl Into<String>) -> Expr {
        Expr::Column(Column {
            table: self.name.clone(),
            name: name.into(),
        })
    }
}

/// Qualified column reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub table: String,
    pub name: String,
}

/// SQL type names used in `CAST` expressions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlType {
    Varchar,
    Integer,
}

impl SqlType {
    pub fn sql(&self) -> &'static str {
        match self {
            SqlType::Varchar => "VARCHAR",
            SqlType::Integer => "INTEGER",
        }
    }
}

/// Condition/value expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Column(Column),
    /// Bind parameter; the value is collected in render order.
    Param(Value),
    Concat(Box<Expr>, Box<Expr>),
    Cast(Box<Expr>, SqlType),
    Binary {
        op: Operator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    InList {
        expr: Box<Expr>,
        values: Vec<Value>,
        negated: bool,
    },
    InSubquery {
        expr: Box<Expr>,
        query: Box<Select>,
        negated: bool,
    },
    And(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn param(value: Value) -> Self {
        Expr::Param(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Expr::Param(Value::Text(value.into()))
    }

    pub fn concat(lhs: Expr, rhs: Expr) -> Self {
        Expr::Concat(Box::new(lhs), Box::new(rhs))
    }

    pub fn cast(inner: Expr, ty: SqlType) -> Self {
        Expr::Cast(Box::new(inner), ty)
    }

    pub fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn eq(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(Operator::Eq, lhs, rhs)
    }

    pub fn in_subquery(expr: Expr, query: Select) -> Self {
        Expr::InSubquery {
            expr: Box::new(expr),
            query: Box::new(query),
            negated: false,
        }
    }

    pub fn and(self, other: Expr) -> Self {
        Expr::And(Box::new(self), Box::new(other))
    }

    /// Render this expression into `sql`, pushing bind values onto `params`
    /// in emission order.
    pub(crate) fn render(&self, sql: &mut String, params: &mut Vec<Value>) {
        match self {
            Expr::Column(col) => {
                sql.push_str(&format!("\"{}\".\"{}\"", col.table, col.name));
            }
            Expr::Param(Value::Ids(ids)) => {
                // An id list binds one placeholder per id.
                sql.push('(');
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        sql.push_str(", ");
                    }
                    sql.push('?');
                    params.push(Value::Int(id.as_i64()));
                }
                sql.push(')');
            }
            Expr::Param(value) => {
                sql.push('?');
                params.push(value.clone());
            }
            Expr::Concat(lhs, rhs) => {
                sql.push('(');
                lhs.render(sql, params);
                sql.push_str(" || ");
                rhs.render(sql, params);
                sql.push(')');
            }
            Expr::Cast(inner, ty) => {
                sql.push_str("CAST(");
                inner.render(sql, params);
                sql.push_str(" AS ");
                sql.push_str(ty.sql());
                sql.push(')');
            }
            Expr::Binary { op, lhs, rhs } => {
                sql.push('(');
                lhs.render(sql, params);
                sql.push(' ');
                sql.push_str(op.sql());
                sql.push(' ');
                rhs.render(sql, params);
                sql.push(')');
            }
            Expr::InList {
                expr,
                values,
                negated,
            } => {
                sql.push('(');
                expr.render(sql, params);
                sql.push_str(if *negated { " NOT IN (" } else { " IN (" });
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        sql.push_str(", ");
                    }
                    sql.push('?');
                    params.push(value.clone());
                }
                sql.push_str("))");
            }
            Expr::InSubquery {
                expr,
                query,
                negated,
            } => {
                sql.push('(');
                expr.render(sql, params);
                sql.push_str(if *negated { " NOT IN (" } else { " IN (" });
                query.render(sql, params);
                sql.push_str("))");
            }
            Expr::And(lhs, rhs) => {
                sql.push('(');
                lhs.render(sql, params);
                sql.push_str(" AND ");
                rhs.render(sql, params);
                sql.push(')');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(expr: &Expr) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut params = Vec::new();
        expr.render(&mut sql, &mut params);
        (sql, params)
    }

    #[test]
    fn renders_qualified_columns() {
        let table = Table::new("stock_move");
        let (sql, params) = render(&table.col("shipment"));
        assert_eq!(sql, "\"stock_move\".\"shipment\"");
        assert!(params.is_empty());
    }

    #[test]
    fn renders_concat_cast_comparison() {
        let stock_move = Table::new("stock_move");
        let shipment = Table::new("stock_shipment_in");
        let expr = Expr::eq(
            stock_move.col("shipment"),
            Expr::concat(
                Expr::text("stock.shipment.in,"),
                Expr::cast(shipment.col("id"), SqlType::Varchar),
            ),
        );
        let (sql, params) = render(&expr);
        assert_eq!(
            sql,
            "(\"stock_move\".\"shipment\" = \
             (? || CAST(\"stock_shipment_in\".\"id\" AS VARCHAR)))"
        );
        assert_eq!(params, vec![Value::Text("stock.shipment.in,".to_string())]);
    }

    #[test]
    fn renders_id_lists_one_placeholder_per_id() {
        use shiplink_core::RecordId;

        let table = Table::new("stock_shipment_in");
        let expr = Expr::InList {
            expr: Box::new(table.col("id")),
            values: vec![Value::Int(7), Value::Int(9)],
            negated: false,
        };
        let (sql, params) = render(&expr);
        assert_eq!(sql, "(\"stock_shipment_in\".\"id\" IN (?, ?))");
        assert_eq!(params, vec![Value::Int(7), Value::Int(9)]);

        let expr = Expr::binary(
            Operator::In,
            table.col("id"),
            Expr::param(Value::Ids(vec![RecordId::new(3)])),
        );
        let (sql, params) = render(&expr);
        assert_eq!(sql, "(\"stock_shipment_in\".\"id\" IN (?))");
        assert_eq!(params, vec![Value::Int(3)]);
    }
}
