//! Cross-reference resolution between invoices, stock moves, and inbound
//! shipments.
//!
//! Two modes per target type: *retrieval* walks the preloaded relation
//! caches, *search* compiles the two-hop chain
//! (line → link → move → shipment) into a membership subquery the host
//! folds into its own plan. Neither mode touches the store.

use std::collections::HashSet;

use shiplink_core::{Model, RecordId};
use shiplink_purchasing::PurchaseLine;
use shiplink_query::{Clause, Expr, QueryError, Searchable, Select, Table, Value};
use shiplink_stock::{ShipmentIn, ShipmentInReturn, StockMove};

use crate::invoice::Invoice;
use crate::line::{InvoiceLine, InvoiceLineStockMove};

/// Shipment ids of type `M` reachable from one invoice line.
///
/// Moves whose reference resolves to a different model are skipped; the
/// result is duplicate-free and unordered.
pub fn line_shipments<M: Model>(line: &InvoiceLine) -> Vec<RecordId> {
    let mut seen = HashSet::new();
    for mv in &line.stock_moves {
        if let Some(shipment) = &mv.shipment {
            if shipment.is::<M>() {
                seen.insert(shipment.id());
            }
        }
    }
    seen.into_iter().collect()
}

/// Shipment ids of type `M` reachable from any line of the invoice.
pub fn invoice_shipments<M: Model>(invoice: &Invoice) -> Vec<RecordId> {
    let mut seen = HashSet::new();
    for line in &invoice.lines {
        for mv in &line.stock_moves {
            if let Some(shipment) = &mv.shipment {
                if shipment.is::<M>() {
                    seen.insert(shipment.id());
                }
            }
        }
    }
    seen.into_iter().collect()
}

/// Join condition matching the polymorphic `shipment` column against
/// `"<tag>,<id>"` rebuilt from the target table, in the column's stored type.
fn shipment_join_condition<M: Searchable>(stock_move: &Table, shipment: &Table) -> Expr {
    Expr::eq(
        stock_move.col("shipment"),
        Expr::concat(
            Expr::text(format!("{},", M::NAME)),
            Expr::cast(shipment.col("id"), StockMove::SHIPMENT_SQL_TYPE),
        ),
    )
}

/// Rewrite a clause over shipment fields into `('id', 'in', <subquery>)`
/// over invoice ids.
///
/// The clause may name the shipment's display name (`rec_name`); resolution
/// is delegated to the target type before its domain is compiled.
pub fn search_invoice_shipments<M: Searchable>(clause: Clause) -> Result<Clause, QueryError> {
    let clause = M::search_rec_name(clause);
    let (shipment, condition) = M::search_domain(&clause)?;

    let invoice_line = Table::of::<InvoiceLine>();
    let link = InvoiceLineStockMove::table();
    let stock_move = Table::of::<StockMove>();

    let query = Select::from(invoice_line.clone())
        .join(
            link.clone(),
            Expr::eq(invoice_line.col("id"), link.col("invoice_line")),
        )
        .join(
            stock_move.clone(),
            Expr::eq(link.col("stock_move"), stock_move.col("id")),
        )
        .join(
            shipment.clone(),
            shipment_join_condition::<M>(&stock_move, &shipment),
        )
        .column(invoice_line.col("invoice"))
        .distinct()
        .filter(condition);

    tracing::debug!(target_model = M::NAME, "compiled invoice shipment search");
    Ok(Clause::in_subquery("id", query))
}

/// Rewrite a clause over shipment fields into `('id', 'in', <subquery>)`
/// over invoice-line ids.
pub fn search_line_shipments<M: Searchable>(clause: Clause) -> Result<Clause, QueryError> {
    let clause = M::search_rec_name(clause);
    let (shipment, condition) = M::search_domain(&clause)?;

    let link = InvoiceLineStockMove::table();
    let stock_move = Table::of::<StockMove>();

    let query = Select::from(link.clone())
        .join(
            stock_move.clone(),
            Expr::eq(link.col("stock_move"), stock_move.col("id")),
        )
        .join(
            shipment.clone(),
            shipment_join_condition::<M>(&stock_move, &shipment),
        )
        .column(link.col("invoice_line"))
        .distinct()
        .filter(condition);

    tracing::debug!(target_model = M::NAME, "compiled line shipment search");
    Ok(Clause::in_subquery("id", query))
}

/// Owning purchase of the line's origin, when the origin is a purchase line.
///
/// Only the reference is cached on the line, so the caller supplies the
/// lookup from purchase-line id to its loaded row.
pub fn line_purchase(
    line: &InvoiceLine,
    lookup: impl Fn(RecordId) -> Option<PurchaseLine>,
) -> Option<RecordId> {
    let origin = line.origin.as_ref()?;
    if !origin.is::<PurchaseLine>() {
        return None;
    }
    lookup(origin.id()).map(|purchase_line| purchase_line.purchase)
}

/// Rewrite a clause on the owning purchase into `('id', 'in', <subquery>)`
/// over invoice-line ids, following the polymorphic `origin` column.
pub fn search_purchase(clause: &Clause) -> Clause {
    let invoice_line = Table::of::<InvoiceLine>();
    let purchase_line = Table::of::<PurchaseLine>();

    let origin = Expr::concat(
        Expr::text(format!("{},", PurchaseLine::NAME)),
        Expr::cast(purchase_line.col("id"), InvoiceLine::ORIGIN_SQL_TYPE),
    );
    let query = Select::from(invoice_line.clone())
        .left_join(
            purchase_line.clone(),
            Expr::eq(invoice_line.col("origin"), origin),
        )
        .column(invoice_line.col("id"))
        .filter(Expr::binary(
            clause.op,
            purchase_line.col("purchase"),
            Expr::param(clause.value.clone()),
        ));

    tracing::debug!("compiled purchase origin search");
    Clause::in_subquery("id", query)
}

/// Comma-joined codes of a line's linked shipments and return shipments,
/// shipments first. The caller loads the records named by
/// [`line_shipments`].
pub fn shipment_info(shipments: &[ShipmentIn], returns: &[ShipmentInReturn]) -> String {
    shipments
        .iter()
        .map(|s| s.code.as_str())
        .chain(returns.iter().map(|r| r.code.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}
