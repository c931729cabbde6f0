//! Store registry.

use sqlx::SqlitePool;

use einkauf_core::{MinimumOrder, SessionState, StoreUrls, ValidationError};

use super::ServiceError;
use crate::db::StoreRepository;
use crate::models::Store;

/// Adds and lists stores.
pub struct StoreRegistry<'a> {
    stores: StoreRepository<'a>,
}

impl<'a> StoreRegistry<'a> {
    /// Create a new store registry.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            stores: StoreRepository::new(pool),
        }
    }

    /// Add a store on behalf of the session's member.
    ///
    /// `urls` is the comma-separated form field; `minimum_order` the raw
    /// amount as typed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` for an anonymous session, before
    /// any input is looked at. Returns `ValidationError::EmptyStoreName`,
    /// `NoStoreUrls` or `InvalidMinimumOrder` for bad input.
    /// Returns `ServiceError::Repository` if the database operation fails.
    pub async fn add_store(
        &self,
        session: &SessionState,
        name: &str,
        urls: &str,
        minimum_order: &str,
    ) -> Result<Store, ServiceError> {
        let member = session.require_auth()?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyStoreName.into());
        }
        let urls = StoreUrls::parse_csv(urls)?;
        let minimum_order = MinimumOrder::parse(minimum_order)?;

        let store = self.stores.create(name, &urls, minimum_order).await?;
        tracing::info!(
            store_id = %store.id,
            member_id = %member.id,
            name = %store.name,
            "Store added"
        );
        Ok(store)
    }

    /// All stores in insertion order. Readable without authentication.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the database operation fails.
    pub async fn list_stores(&self) -> Result<Vec<Store>, ServiceError> {
        Ok(self.stores.list().await?)
    }
}
