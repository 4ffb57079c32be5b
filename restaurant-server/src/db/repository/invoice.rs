//! Invoice Repository

use chrono::{Duration, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Invoice, InvoiceCreate, InvoiceUpdate, Order};

const TABLE: &str = "invoice";

#[derive(Clone)]
pub struct InvoiceRepository {
    base: BaseRepository,
}

impl InvoiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Invoice>> {
        let invoices: Vec<Invoice> = self
            .base
            .db()
            .query("SELECT * FROM invoice ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(invoices)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Invoice>> {
        let thing = parse_id(id)?;
        let invoice: Option<Invoice> = self.base.db().select(thing).await?;
        Ok(invoice)
    }

    /// Create an invoice for an existing order. Payment status defaults to
    /// PENDING; the payment is due one day after creation.
    pub async fn create(&self, data: InvoiceCreate) -> RepoResult<Invoice> {
        let order: Option<Order> = self.base.db().select(data.order.clone()).await?;
        if order.is_none() {
            return Err(RepoError::NotFound(format!(
                "Order {} not found",
                data.order
            )));
        }

        let now = Utc::now();
        let invoice = Invoice {
            id: None,
            order: data.order,
            payment_method: data.payment_method,
            payment_status: data.payment_status.unwrap_or_default(),
            payment_due_date: now + Duration::days(1),
            created_at: now,
            updated_at: now,
        };

        let created: Option<Invoice> = self.base.db().create(TABLE).content(invoice).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create invoice".to_string()))
    }

    /// Only payment method and status are mutable after creation
    pub async fn update(&self, id: &str, data: InvoiceUpdate) -> RepoResult<Invoice> {
        let thing = parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Invoice {} not found", id)))?;

        let payment_method = data.payment_method.or(existing.payment_method);
        let payment_status = data.payment_status.unwrap_or(existing.payment_status);

        self.base
            .db()
            .query(
                "UPDATE $thing SET payment_method = $payment_method, \
                 payment_status = $payment_status, updated_at = $updated_at",
            )
            .bind(("thing", thing))
            .bind(("payment_method", payment_method))
            .bind(("payment_status", payment_status))
            .bind(("updated_at", Utc::now()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Invoice {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_id(id)?;
        let deleted: Option<Invoice> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
