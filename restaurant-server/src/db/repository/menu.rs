//! Menu Repository

use chrono::{DateTime, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Menu, MenuCreate, MenuUpdate};

const TABLE: &str = "menu";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Menu>> {
        let menus: Vec<Menu> = self
            .base
            .db()
            .query("SELECT * FROM menu ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(menus)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Menu>> {
        let thing = parse_id(id)?;
        let menu: Option<Menu> = self.base.db().select(thing).await?;
        Ok(menu)
    }

    pub async fn create(&self, data: MenuCreate) -> RepoResult<Menu> {
        let now = Utc::now();
        let menu = Menu {
            id: None,
            name: data.name,
            category: data.category,
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Menu> = self.base.db().create(TABLE).content(menu).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu".to_string()))
    }

    pub async fn update(&self, id: &str, data: MenuUpdate) -> RepoResult<Menu> {
        let thing = parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu {} not found", id)))?;

        // Promotional window: both dates move together and the new window
        // must still be open (start < end, end in the future).
        let (start_date, end_date) = match (data.start_date, data.end_date) {
            (Some(start), Some(end)) => {
                validate_window(start, end)?;
                (Some(start), Some(end))
            }
            (None, None) => (existing.start_date, existing.end_date),
            _ => {
                return Err(RepoError::Validation(
                    "start_date and end_date must be provided together".to_string(),
                ));
            }
        };

        let name = data.name.unwrap_or(existing.name);
        let category = data.category.unwrap_or(existing.category);

        self.base
            .db()
            .query(
                "UPDATE $thing SET name = $name, category = $category, \
                 start_date = $start_date, end_date = $end_date, updated_at = $updated_at",
            )
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("category", category))
            .bind(("start_date", start_date))
            .bind(("end_date", end_date))
            .bind(("updated_at", Utc::now()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_id(id)?;
        let deleted: Option<Menu> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}

/// A promotional window is well-formed iff it starts before it ends and has
/// not already ended.
fn validate_window(start: DateTime<Utc>, end: DateTime<Utc>) -> RepoResult<()> {
    if start >= end {
        return Err(RepoError::Validation(
            "start_date must be before end_date".to_string(),
        ));
    }
    if end <= Utc::now() {
        return Err(RepoError::Validation(
            "menu window has already ended".to_string(),
        ));
    }
    Ok(())
}
