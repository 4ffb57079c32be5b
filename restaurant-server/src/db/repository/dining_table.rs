//! Dining Table Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};

const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY table_number")
            .await?
            .take(0)?;
        Ok(tables)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let thing = parse_id(id)?;
        let table: Option<DiningTable> = self.base.db().select(thing).await?;
        Ok(table)
    }

    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        // Table numbers identify tables on the floor; keep them unique
        let existing: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE table_number = $number LIMIT 1")
            .bind(("number", data.table_number))
            .await?
            .take(0)?;
        if !existing.is_empty() {
            return Err(RepoError::Duplicate(format!(
                "Table number {} already exists",
                data.table_number
            )));
        }

        let now = Utc::now();
        let table = DiningTable {
            id: None,
            table_number: data.table_number,
            guest_count: data.guest_count,
            created_at: now,
            updated_at: now,
        };

        let created: Option<DiningTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create dining table".to_string()))
    }

    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let thing = parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))?;

        let table_number = data.table_number.unwrap_or(existing.table_number);
        let guest_count = data.guest_count.unwrap_or(existing.guest_count);

        self.base
            .db()
            .query(
                "UPDATE $thing SET table_number = $table_number, \
                 guest_count = $guest_count, updated_at = $updated_at",
            )
            .bind(("thing", thing))
            .bind(("table_number", table_number))
            .bind(("guest_count", guest_count))
            .bind(("updated_at", Utc::now()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_id(id)?;
        let deleted: Option<DiningTable> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
