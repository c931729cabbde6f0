//! Domain models for einkauf-o-matic.
//!
//! These are validated domain objects, separate from the row types in `db`.

pub mod member;
pub mod queue;
pub mod session;
pub mod store;

pub use member::Member;
pub use queue::{Queue, QueueListing};
pub use session::keys as session_keys;
pub use store::Store;
