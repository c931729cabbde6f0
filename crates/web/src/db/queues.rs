//! Queue repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use einkauf_core::{Deadline, QueueId, StoreId, StoreUrls};

use super::RepositoryError;
use crate::models::{Queue, QueueListing};

#[derive(sqlx::FromRow)]
struct QueueListingRow {
    id: QueueId,
    title: String,
    deadline: String,
    store_id: StoreId,
    created_at: DateTime<Utc>,
    store_name: String,
    store_urls: String,
}

impl TryFrom<QueueListingRow> for QueueListing {
    type Error = RepositoryError;

    fn try_from(row: QueueListingRow) -> Result<Self, Self::Error> {
        let urls: StoreUrls = serde_json::from_str(&row.store_urls).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid urls for store {}: {e}", row.store_id))
        })?;

        Ok(Self {
            queue: Queue {
                id: row.id,
                title: row.title,
                deadline: Deadline::new(row.deadline),
                store_id: row.store_id,
                created_at: row.created_at,
            },
            store_name: row.store_name,
            store_url: urls.primary().to_owned(),
        })
    }
}

/// Repository for queue database operations.
pub struct QueueRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QueueRepository<'a> {
    /// Create a new queue repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a queue for an existing store.
    ///
    /// The store lookup and the insert share one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the store does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_for_store(
        &self,
        title: &str,
        deadline: &Deadline,
        store_id: StoreId,
    ) -> Result<Queue, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let store_exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM store WHERE id = ?1")
            .bind(store_id)
            .fetch_optional(&mut *tx)
            .await?;

        if store_exists.is_none() {
            return Err(RepositoryError::NotFound);
        }

        let created_at = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO queue (title, deadline, store_id, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(title)
        .bind(deadline.as_str())
        .bind(store_id)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Queue {
            id: QueueId::new(result.last_insert_rowid()),
            title: title.to_owned(),
            deadline: deadline.clone(),
            store_id,
            created_at,
        })
    }

    /// List all queues in insertion order, joined with their store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a store row is invalid.
    pub async fn list(&self) -> Result<Vec<QueueListing>, RepositoryError> {
        let rows = sqlx::query_as::<_, QueueListingRow>(
            r"
            SELECT q.id, q.title, q.deadline, q.store_id, q.created_at,
                   s.name AS store_name, s.urls AS store_urls
            FROM queue q
            JOIN store s ON s.id = q.store_id
            ORDER BY q.id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(QueueListing::try_from).collect()
    }
}
