//! Order summary and invoice view assembly
//!
//! Joins an order's items against foods (name/image/unit price) and the
//! order's dining table (table number), producing exactly one denormalized
//! summary per order. The invoice view merges payment metadata with that
//! summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

use super::money;
use crate::db::models::{
    DiningTable, Food, Invoice, Order, OrderItem, PaymentMethod, PaymentStatus,
};
use crate::db::repository::RepoError;

/// Aggregation error kinds
#[derive(Debug, Error)]
pub enum BillingError {
    /// A referenced order, food, table or invoice is missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// The join produced something other than exactly one summary row
    #[error("Ambiguous order summary: {0}")]
    Ambiguous(String),

    /// Storage query failure
    #[error("Storage error: {0}")]
    Upstream(String),
}

impl From<surrealdb::Error> for BillingError {
    fn from(err: surrealdb::Error) -> Self {
        BillingError::Upstream(err.to_string())
    }
}

impl From<RepoError> for BillingError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => BillingError::NotFound(msg),
            other => BillingError::Upstream(other.to_string()),
        }
    }
}

/// One priced line of an order summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryLine {
    pub image: String,
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Denormalized view of one order: its lines, table and payment-due total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub table_number: i32,
    pub total_count: usize,
    pub order_items: Vec<SummaryLine>,
    pub payment_due: f64,
}

/// Invoice presentation object: payment metadata merged with the order
/// summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceView {
    pub invoice_id: String,
    pub order_id: String,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    pub payment_due_date: DateTime<Utc>,
    pub table_number: i32,
    pub payment_due: f64,
    pub order_details: Vec<SummaryLine>,
}

/// Read-only aggregation over already-stored orders
///
/// Holds its database handle as an explicit dependency; every call is an
/// independent, idempotent read.
#[derive(Clone)]
pub struct BillingService {
    db: Surreal<Db>,
}

impl BillingService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// Build the summary for one order
    ///
    /// Fails with `NotFound` when the order or any referenced food/table is
    /// missing, and with `Ambiguous` when the order has no lines to fold
    /// into a summary.
    pub async fn order_summary(&self, order_id: &str) -> Result<OrderSummary, BillingError> {
        let order_ref: RecordId = order_id
            .parse()
            .map_err(|_| BillingError::NotFound(format!("Invalid order ID: {}", order_id)))?;

        let order: Option<Order> = self.db.select(order_ref.clone()).await?;
        let order = order
            .ok_or_else(|| BillingError::NotFound(format!("Order {} not found", order_id)))?;

        let table: Option<DiningTable> = self.db.select(order.dining_table.clone()).await?;
        let table = table.ok_or_else(|| {
            BillingError::NotFound(format!(
                "Dining table {} of order {} not found",
                order.dining_table, order_id
            ))
        })?;

        // Link fields are stored in "table:key" string form, so the match
        // key is the rendered id
        let mut result = self
            .db
            .query("SELECT * FROM order_item WHERE order = $order ORDER BY created_at")
            .bind(("order", order_ref.to_string()))
            .await?;
        let items: Vec<OrderItem> = result.take(0)?;

        // Join each line against its food
        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let food: Option<Food> = self.db.select(item.food.clone()).await?;
            let food = food.ok_or_else(|| {
                BillingError::NotFound(format!(
                    "Food {} of order {} not found",
                    item.food, order_id
                ))
            })?;
            lines.push(SummaryLine {
                image: food.image,
                name: food.name,
                quantity: item.quantity,
                unit_price: food.unit_price,
                total_price: item.total_price,
            });
        }

        assemble_summary(table.table_number, lines)
    }

    /// Build the invoice view for one invoice
    ///
    /// Resolves the invoice, requires exactly one order summary for its
    /// order, and merges the payment metadata with the summary fields.
    pub async fn invoice_view(&self, invoice_id: &str) -> Result<InvoiceView, BillingError> {
        let invoice_ref: RecordId = invoice_id
            .parse()
            .map_err(|_| BillingError::NotFound(format!("Invalid invoice ID: {}", invoice_id)))?;

        let invoice: Option<Invoice> = self.db.select(invoice_ref).await?;
        let invoice = invoice
            .ok_or_else(|| BillingError::NotFound(format!("Invoice {} not found", invoice_id)))?;

        let order_id = invoice.order.to_string();
        let summary = self.order_summary(&order_id).await?;

        Ok(InvoiceView {
            invoice_id: invoice
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| invoice_id.to_string()),
            order_id,
            payment_method: invoice.payment_method,
            payment_status: invoice.payment_status,
            payment_due_date: invoice.payment_due_date,
            table_number: summary.table_number,
            payment_due: summary.payment_due,
            order_details: summary.order_items,
        })
    }
}

/// Fold joined lines into the single summary record
///
/// An order with zero joined lines has no summary; reporting it as
/// `Ambiguous` keeps a default-valued summary from ever leaving this module.
pub fn assemble_summary(
    table_number: i32,
    lines: Vec<SummaryLine>,
) -> Result<OrderSummary, BillingError> {
    if lines.is_empty() {
        return Err(BillingError::Ambiguous(
            "Order has no line items to summarize".to_string(),
        ));
    }

    let payment_due = money::sum_totals(lines.iter().map(|l| l.total_price));

    Ok(OrderSummary {
        table_number,
        total_count: lines.len(),
        order_items: lines,
        payment_due,
    })
}
