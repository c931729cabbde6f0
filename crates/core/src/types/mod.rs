//! Core types for einkauf-o-matic.
//!
//! This module provides type-safe wrappers for the domain's form fields.

pub mod deadline;
pub mod id;
pub mod minimum_order;
pub mod store_urls;
pub mod username;

pub use deadline::Deadline;
pub use id::*;
pub use minimum_order::MinimumOrder;
pub use store_urls::StoreUrls;
pub use username::Username;
