//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Credential store (registration, seeding) and session gate
//!   (login, logout)
//! - `stores` - Store registry
//! - `queues` - Queue registry
//!
//! Every mutating operation takes the caller's `SessionState` explicitly and
//! checks it through `SessionState::require_auth` before touching the
//! database.

pub mod auth;
pub mod error;
pub mod queues;
pub mod stores;

pub use auth::{CredentialStore, SessionGate};
pub use error::ServiceError;
pub use queues::QueueRegistry;
pub use stores::StoreRegistry;
