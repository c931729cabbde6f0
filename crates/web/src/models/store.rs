//! Store domain type.

use chrono::{DateTime, Utc};

use einkauf_core::{MinimumOrder, StoreId, StoreUrls};

/// A merchant that queues order from.
#[derive(Debug, Clone)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    /// Ordering URLs; the first one is the store's link.
    pub urls: StoreUrls,
    pub minimum_order: MinimumOrder,
    pub created_at: DateTime<Utc>,
}
