//! Order Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{DiningTable, Order, OrderCreate, OrderUpdate};

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = parse_id(id)?;
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Open a new order against an existing dining table
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let table: Option<DiningTable> =
            self.base.db().select(data.dining_table.clone()).await?;
        if table.is_none() {
            return Err(RepoError::NotFound(format!(
                "Dining table {} not found",
                data.dining_table
            )));
        }

        let now = Utc::now();
        let order = Order {
            id: None,
            dining_table: data.dining_table,
            order_date: now,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Move the order to another (existing) dining table
    pub async fn update(&self, id: &str, data: OrderUpdate) -> RepoResult<Order> {
        let thing = parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        if let Some(table_ref) = &data.dining_table {
            let table: Option<DiningTable> = self.base.db().select(table_ref.clone()).await?;
            if table.is_none() {
                return Err(RepoError::NotFound(format!(
                    "Dining table {} not found",
                    table_ref
                )));
            }
        }

        let dining_table = data.dining_table.unwrap_or(existing.dining_table);

        self.base
            .db()
            .query("UPDATE $thing SET dining_table = $dining_table, updated_at = $updated_at")
            .bind(("thing", thing))
            .bind(("dining_table", dining_table.to_string()))
            .bind(("updated_at", Utc::now()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_id(id)?;
        let deleted: Option<Order> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
