//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added by the binary)
//! 2. `TraceLayer` (request span with a `request_id` field)
//! 3. Request ID (fills the span field, Sentry tag, response header)
//! 4. Session layer (tower-sessions with the SQLite store)

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::SessionContext;
pub use request_id::{RequestId, request_id_middleware};
pub use session::create_session_layer;
