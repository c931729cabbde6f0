//! Store repository for database operations.
//!
//! URLs are persisted as a JSON array and the minimum order as a decimal
//! string; both are re-validated when rows are read back.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use einkauf_core::{MinimumOrder, StoreId, StoreUrls};

use super::RepositoryError;
use crate::models::Store;

#[derive(sqlx::FromRow)]
struct StoreRow {
    id: StoreId,
    name: String,
    urls: String,
    minimum_order: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<StoreRow> for Store {
    type Error = RepositoryError;

    fn try_from(row: StoreRow) -> Result<Self, Self::Error> {
        let urls: StoreUrls = serde_json::from_str(&row.urls).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid urls for store {}: {e}", row.id))
        })?;
        let minimum_order = MinimumOrder::parse(&row.minimum_order).map_err(|e| {
            RepositoryError::DataCorruption(format!(
                "invalid minimum order for store {}: {e}",
                row.id
            ))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            urls,
            minimum_order,
            created_at: row.created_at,
        })
    }
}

/// Repository for store database operations.
pub struct StoreRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        name: &str,
        urls: &StoreUrls,
        minimum_order: MinimumOrder,
    ) -> Result<Store, RepositoryError> {
        let urls_json = serde_json::to_string(urls).map_err(|e| {
            RepositoryError::DataCorruption(format!("failed to serialize urls: {e}"))
        })?;
        let created_at = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO store (name, urls, minimum_order, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(name)
        .bind(&urls_json)
        .bind(minimum_order.to_string())
        .bind(created_at)
        .execute(self.pool)
        .await?;

        Ok(Store {
            id: StoreId::new(result.last_insert_rowid()),
            name: name.to_owned(),
            urls: urls.clone(),
            minimum_order,
            created_at,
        })
    }

    /// List all stores in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored row is invalid.
    pub async fn list(&self) -> Result<Vec<Store>, RepositoryError> {
        let rows = sqlx::query_as::<_, StoreRow>(
            r"
            SELECT id, name, urls, minimum_order, created_at
            FROM store
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Store::try_from).collect()
    }
}
