//! einkauf-o-matic core - shared domain types.
//!
//! This crate provides the types used across all einkauf-o-matic components:
//! - `web` - Server-rendered application (registration, login, stores, queues)
//! - `cli` - Command-line tools for migrations and member management
//!
//! # Architecture
//!
//! The core crate contains only types and validation rules - no I/O, no
//! database access, no HTTP. The web crate owns persistence and rendering and
//! passes an explicit [`SessionState`] into every gate and registry operation.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, usernames, store URLs, order amounts, deadlines
//! - [`session`] - The two-state session machine (`Anonymous` / `Authenticated`)
//! - [`error`] - Tagged error kinds; literal messages live in the web crate

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod session;
pub mod types;

pub use error::{AuthError, DomainError, ReferenceError, ValidationError};
pub use session::{CurrentMember, SessionState};
pub use types::*;
