//! Food Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::billing::money;
use crate::db::models::{Food, FoodCreate, FoodUpdate, Menu};

const TABLE: &str = "food";

#[derive(Clone)]
pub struct FoodRepository {
    base: BaseRepository,
}

impl FoodRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Food>> {
        let foods: Vec<Food> = self
            .base
            .db()
            .query("SELECT * FROM food ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(foods)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Food>> {
        let thing = parse_id(id)?;
        let food: Option<Food> = self.base.db().select(thing).await?;
        Ok(food)
    }

    /// Create a food; the owning menu must exist and the unit price is
    /// normalized to 2 decimal places.
    pub async fn create(&self, data: FoodCreate) -> RepoResult<Food> {
        let menu: Option<Menu> = self.base.db().select(data.menu.clone()).await?;
        if menu.is_none() {
            return Err(RepoError::NotFound(format!("Menu {} not found", data.menu)));
        }

        let now = Utc::now();
        let food = Food {
            id: None,
            name: data.name,
            unit_price: money::round_to_cents(data.unit_price),
            image: data.image,
            menu: data.menu,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Food> = self.base.db().create(TABLE).content(food).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create food".to_string()))
    }

    pub async fn update(&self, id: &str, data: FoodUpdate) -> RepoResult<Food> {
        let thing = parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Food {} not found", id)))?;

        // Moving the food to another menu requires that menu to exist
        if let Some(menu_ref) = &data.menu {
            let menu: Option<Menu> = self.base.db().select(menu_ref.clone()).await?;
            if menu.is_none() {
                return Err(RepoError::NotFound(format!("Menu {} not found", menu_ref)));
            }
        }

        let name = data.name.unwrap_or(existing.name);
        let unit_price = data
            .unit_price
            .map(money::round_to_cents)
            .unwrap_or(existing.unit_price);
        let image = data.image.unwrap_or(existing.image);
        let menu = data.menu.unwrap_or(existing.menu);

        self.base
            .db()
            .query(
                "UPDATE $thing SET name = $name, unit_price = $unit_price, \
                 image = $image, menu = $menu, updated_at = $updated_at",
            )
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("unit_price", unit_price))
            .bind(("image", image))
            .bind(("menu", menu.to_string()))
            .bind(("updated_at", Utc::now()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Food {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_id(id)?;
        let deleted: Option<Food> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
