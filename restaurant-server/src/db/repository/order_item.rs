//! Order Item Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, OrderRepository, RepoError, RepoResult, parse_id};
use crate::billing::money;
use crate::db::models::{Food, Order, OrderCreate, OrderItem, OrderItemUpdate, OrderPack};

const TABLE: &str = "order_item";

#[derive(Clone)]
pub struct OrderItemRepository {
    base: BaseRepository,
}

impl OrderItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<OrderItem>> {
        let items: Vec<OrderItem> = self
            .base
            .db()
            .query("SELECT * FROM order_item ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderItem>> {
        let thing = parse_id(id)?;
        let item: Option<OrderItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    pub async fn find_by_order(&self, order: &str) -> RepoResult<Vec<OrderItem>> {
        let order_ref = parse_id(order)?;
        let items: Vec<OrderItem> = self
            .base
            .db()
            .query("SELECT * FROM order_item WHERE order = $order ORDER BY created_at")
            .bind(("order", order_ref.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Create an order pack: opens a new order on the table and inserts all
    /// lines, pricing each from its food's unit price.
    ///
    /// Every referenced food is resolved before anything is inserted, so a
    /// missing food rejects the whole pack.
    pub async fn create_pack(&self, pack: OrderPack) -> RepoResult<(Order, Vec<OrderItem>)> {
        let mut priced = Vec::with_capacity(pack.order_items.len());
        for line in &pack.order_items {
            let food: Option<Food> = self.base.db().select(line.food.clone()).await?;
            let food =
                food.ok_or_else(|| RepoError::NotFound(format!("Food {} not found", line.food)))?;
            priced.push((
                line.food.clone(),
                line.quantity,
                money::line_total(food.unit_price, line.quantity),
            ));
        }

        let order_repo = OrderRepository::new(self.base.db().clone());
        let order = order_repo
            .create(OrderCreate {
                dining_table: pack.dining_table,
            })
            .await?;
        let order_ref = order
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Created order has no ID".to_string()))?;

        let mut created_items = Vec::with_capacity(priced.len());
        for (food, quantity, total_price) in priced {
            let now = Utc::now();
            let item = OrderItem {
                id: None,
                order: order_ref.clone(),
                food,
                quantity,
                total_price,
                created_at: now,
                updated_at: now,
            };
            let created: Option<OrderItem> = self.base.db().create(TABLE).content(item).await?;
            let created = created
                .ok_or_else(|| RepoError::Database("Failed to create order item".to_string()))?;
            created_items.push(created);
        }

        Ok((order, created_items))
    }

    /// Update quantity and/or food of a line; the line total is recomputed
    /// from the effective food's unit price and the effective quantity.
    pub async fn update(&self, id: &str, data: OrderItemUpdate) -> RepoResult<OrderItem> {
        let thing = parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order item {} not found", id)))?;

        let food_ref = data.food.unwrap_or(existing.food);
        let food: Option<Food> = self.base.db().select(food_ref.clone()).await?;
        let food =
            food.ok_or_else(|| RepoError::NotFound(format!("Food {} not found", food_ref)))?;

        let quantity = data.quantity.unwrap_or(existing.quantity);
        let total_price = money::line_total(food.unit_price, quantity);

        self.base
            .db()
            .query(
                "UPDATE $thing SET food = $food, quantity = $quantity, \
                 total_price = $total_price, updated_at = $updated_at",
            )
            .bind(("thing", thing))
            .bind(("food", food_ref.to_string()))
            .bind(("quantity", quantity))
            .bind(("total_price", total_price))
            .bind(("updated_at", Utc::now()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order item {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_id(id)?;
        let deleted: Option<OrderItem> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
