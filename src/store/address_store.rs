//! The five store operations over the `addresses` table.

use sqlx::sqlite::SqlitePool;

use crate::model::{AddressInput, AddressRecord};

use super::{Database, StoreResult};

const SELECT_COLUMNS: &str = "SELECT id, houseNumber, road, category, latitude, longitude FROM addresses";

/// CRUD operations over the `addresses` table.
///
/// Cheap to clone; every handler shares the same underlying pool.
#[derive(Debug, Clone)]
pub struct AddressStore {
    pool: SqlitePool,
}

impl AddressStore {
    pub fn new(database: &Database) -> Self {
        Self {
            pool: database.pool().clone(),
        }
    }

    /// Insert a new row and return the generated id.
    pub async fn insert(&self, input: &AddressInput) -> StoreResult<i64> {
        let result = sqlx::query(
            "INSERT INTO addresses (houseNumber, road, category, latitude, longitude) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.house_number)
        .bind(&input.road)
        .bind(input.category)
        .bind(input.latitude)
        .bind(input.longitude)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch one row by id. Used by create to echo the stored record back.
    pub async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<AddressRecord>> {
        let record = sqlx::query_as::<_, AddressRecord>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Every row, in natural storage order. No pagination.
    pub async fn list_all(&self) -> StoreResult<Vec<AddressRecord>> {
        let records = sqlx::query_as::<_, AddressRecord>(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Overwrite all five fields of the row matching `id`.
    ///
    /// Returns the affected-row count: 0 means no such row.
    pub async fn update_by_id(&self, id: i64, input: &AddressInput) -> StoreResult<u64> {
        let result = sqlx::query(
            "UPDATE addresses \
             SET houseNumber = ?, road = ?, category = ?, latitude = ?, longitude = ? \
             WHERE id = ?",
        )
        .bind(&input.house_number)
        .bind(&input.road)
        .bind(input.category)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Physically remove the row matching `id`. 0 affected means not found.
    pub async fn delete_by_id(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn oak_street() -> AddressInput {
        AddressInput {
            house_number: "12B".to_string(),
            road: "Oak Street".to_string(),
            category: Category::Home,
            latitude: 20.5368,
            longitude: 76.1809,
        }
    }

    async fn open_store() -> AddressStore {
        let database = Database::in_memory().await.unwrap();
        AddressStore::new(&database)
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let store = open_store().await;
        let first = store.insert(&oak_street()).await.unwrap();
        let second = store.insert(&oak_street()).await.unwrap();
        assert_ne!(first, second);

        // Duplicates are permitted; both rows persist.
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_insert_then_fetch_round_trips() {
        let store = open_store().await;
        let id = store.insert(&oak_street()).await.unwrap();

        let record = store.fetch_by_id(id).await.unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.house_number, "12B");
        assert_eq!(record.road, "Oak Street");
        assert_eq!(record.category, Category::Home);
        assert_eq!(record.latitude, 20.5368);
        assert_eq!(record.longitude, 76.1809);
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_is_none() {
        let store = open_store().await;
        assert!(store.fetch_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let store = open_store().await;
        let id = store.insert(&oak_street()).await.unwrap();
        let other = store.insert(&oak_street()).await.unwrap();

        let mut changed = oak_street();
        changed.category = Category::Office;
        changed.road = "Elm Road".to_string();
        let affected = store.update_by_id(id, &changed).await.unwrap();
        assert_eq!(affected, 1);

        let record = store.fetch_by_id(id).await.unwrap().unwrap();
        assert_eq!(record.category, Category::Office);
        assert_eq!(record.road, "Elm Road");
        assert_eq!(record.house_number, "12B");

        // The other row is untouched.
        let untouched = store.fetch_by_id(other).await.unwrap().unwrap();
        assert_eq!(untouched.category, Category::Home);
        assert_eq!(untouched.road, "Oak Street");
    }

    #[tokio::test]
    async fn test_update_unknown_id_affects_nothing() {
        let store = open_store().await;
        store.insert(&oak_street()).await.unwrap();

        let affected = store.update_by_id(999, &oak_street()).await.unwrap();
        assert_eq!(affected, 0);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_physical_and_idempotent_at_zero() {
        let store = open_store().await;
        let id = store.insert(&oak_street()).await.unwrap();

        assert_eq!(store.delete_by_id(id).await.unwrap(), 1);
        assert!(store.list_all().await.unwrap().is_empty());

        // Second delete finds nothing.
        assert_eq!(store.delete_by_id(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_friends_and_family_category_round_trips() {
        let store = open_store().await;
        let mut input = oak_street();
        input.category = Category::FriendsAndFamily;
        let id = store.insert(&input).await.unwrap();

        let record = store.fetch_by_id(id).await.unwrap().unwrap();
        assert_eq!(record.category, Category::FriendsAndFamily);
    }

    #[tokio::test]
    async fn test_open_on_disk_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addresses.db");

        let database = Database::open(&path).await.unwrap();
        let store = AddressStore::new(&database);
        let id = store.insert(&oak_street()).await.unwrap();
        database.close().await;

        let reopened = Database::open(&path).await.unwrap();
        let store = AddressStore::new(&reopened);
        let record = store.fetch_by_id(id).await.unwrap().unwrap();
        assert_eq!(record.road, "Oak Street");
    }
}
