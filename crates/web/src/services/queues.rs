//! Queue registry.

use sqlx::SqlitePool;

use einkauf_core::{Deadline, ReferenceError, SessionState, StoreId, ValidationError};

use super::ServiceError;
use crate::db::{QueueRepository, RepositoryError};
use crate::models::{Queue, QueueListing};

/// Adds and lists purchase queues.
pub struct QueueRegistry<'a> {
    queues: QueueRepository<'a>,
}

impl<'a> QueueRegistry<'a> {
    /// Create a new queue registry.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            queues: QueueRepository::new(pool),
        }
    }

    /// Open a queue for an existing store.
    ///
    /// `store` is the store selector as submitted by the form (a store ID).
    /// The deadline is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` for an anonymous session.
    /// Returns `ValidationError::EmptyQueueTitle` for a blank title.
    /// Returns `ReferenceError::UnknownStore` if the selector does not name an
    /// existing store. Returns `ServiceError::Repository` if the database
    /// operation fails.
    pub async fn add_queue(
        &self,
        session: &SessionState,
        title: &str,
        deadline: &str,
        store: &str,
    ) -> Result<Queue, ServiceError> {
        let member = session.require_auth()?;

        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyQueueTitle.into());
        }

        let store_id = store
            .trim()
            .parse::<i64>()
            .map(StoreId::new)
            .map_err(|_| ReferenceError::UnknownStore)?;
        let deadline = Deadline::new(deadline.trim());

        let queue = self
            .queues
            .create_for_store(title, &deadline, store_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReferenceError::UnknownStore.into(),
                other => ServiceError::Repository(other),
            })?;

        tracing::info!(
            queue_id = %queue.id,
            store_id = %queue.store_id,
            member_id = %member.id,
            "Queue added"
        );
        Ok(queue)
    }

    /// All queues in insertion order with their store. Readable without
    /// authentication.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the database operation fails.
    pub async fn list_queues(&self) -> Result<Vec<QueueListing>, ServiceError> {
        Ok(self.queues.list().await?)
    }
}
