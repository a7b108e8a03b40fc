//! Join + select builder producing parameterized SQL.

use serde::{Deserialize, Serialize};

use crate::clause::Value;
use crate::expr::{Expr, Table};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
}

impl JoinKind {
    fn sql(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Join {
    table: Table,
    kind: JoinKind,
    on: Expr,
}

/// A `SELECT` over a join chain, rendered to parameterized SQL.
///
/// Searchers return these inside membership clauses; the host (or a test
/// harness) decides where and whether to execute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    from: Table,
    joins: Vec<Join>,
    columns: Vec<Expr>,
    condition: Option<Expr>,
    distinct: bool,
}

impl Select {
    pub fn from(table: Table) -> Self {
        Self {
            from: table,
            joins: Vec::new(),
            columns: Vec::new(),
            condition: None,
            distinct: false,
        }
    }

    pub fn join(mut self, table: Table, on: Expr) -> Self {
        self.joins.push(Join {
            table,
            kind: JoinKind::Inner,
            on,
        });
        self
    }

    pub fn left_join(mut self, table: Table, on: Expr) -> Self {
        self.joins.push(Join {
            table,
            kind: JoinKind::Left,
            on,
        });
        self
    }

    pub fn column(mut self, column: Expr) -> Self {
        self.columns.push(column);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// AND the condition onto any previously set one.
    pub fn filter(mut self, condition: Expr) -> Self {
        self.condition = Some(match self.condition.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    /// Render to SQL text plus bind values, collected in placeholder order.
    pub fn build(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut params = Vec::new();
        self.render(&mut sql, &mut params);
        (sql, params)
    }

    pub(crate) fn render(&self, sql: &mut String, params: &mut Vec<Value>) {
        sql.push_str("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            column.render(sql, params);
        }
        sql.push_str(" FROM \"");
        sql.push_str(self.from.name());
        sql.push('"');
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join.kind.sql());
            sql.push_str(" \"");
            sql.push_str(join.table.name());
            sql.push_str("\" ON ");
            join.on.render(sql, params);
        }
        if let Some(condition) = &self.condition {
            sql.push_str(" WHERE ");
            condition.render(sql, params);
        }
    }
}
