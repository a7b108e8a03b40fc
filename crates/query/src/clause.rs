//! Generic search-clause grammar.
//!
//! A search domain is a conjunction of `(field, operator, value)` clauses.
//! Clauses are wire types: the host serializes them between its UI, API, and
//! the per-model domain compilers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shiplink_core::RecordId;

use crate::select::Select;

/// Comparison operators recognized by the clause grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "ilike")]
    ILike,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not in")]
    NotIn,
}

impl Operator {
    /// SQL spelling of the operator.
    ///
    /// `ilike` renders as `LIKE`; case folding is left to the host collation.
    pub fn sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Like | Operator::ILike => "LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
        }
    }
}

/// Clause value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Int(i64),
    Date(NaiveDate),
    Ids(Vec<RecordId>),
    /// Membership in a generated sub-select; never a materialized id list.
    Subquery(Box<Select>),
}

/// A single `(field, operator, value)` comparison in a search domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub field: String,
    pub op: Operator,
    pub value: Value,
}

impl Clause {
    pub fn new(field: impl Into<String>, op: Operator, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Membership predicate `field IN (<select>)`.
    pub fn in_subquery(field: impl Into<String>, query: Select) -> Self {
        Self::new(field, Operator::In, Value::Subquery(Box::new(query)))
    }
}
