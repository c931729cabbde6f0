//! Queue domain types.

use chrono::{DateTime, Utc};

use einkauf_core::{Deadline, QueueId, StoreId};

/// A purchase queue collecting orders for one store until its deadline.
#[derive(Debug, Clone)]
pub struct Queue {
    pub id: QueueId,
    pub title: String,
    pub deadline: Deadline,
    pub store_id: StoreId,
    pub created_at: DateTime<Utc>,
}

/// A queue together with the store details shown next to it.
#[derive(Debug, Clone)]
pub struct QueueListing {
    pub queue: Queue,
    pub store_name: String,
    /// Primary URL of the referenced store.
    pub store_url: String,
}
