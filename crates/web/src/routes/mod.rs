//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Stores and queues (gating message when anonymous)
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (database)
//!
//! # Auth
//! GET  /register      - Register page
//! POST /register      - Register action
//! GET  /login         - Login page
//! POST /login         - Login action
//! GET  /logout        - Logout action (link in the navigation)
//! POST /logout        - Logout action
//!
//! # Registries (require an authenticated session)
//! POST /addstore      - Add a store
//! POST /add           - Add a queue
//! ```
//!
//! Every action answers with a 303 redirect carrying a notice code.

pub mod auth;
pub mod health;
pub mod home;
pub mod queues;
pub mod stores;

use axum::{
    Router,
    extract::Request,
    middleware::from_fn,
    response::Redirect,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::middleware::{create_session_layer, request_id_middleware};
use crate::notice::Notice;
use crate::services::ServiceError;
use crate::state::AppState;

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout).post(auth::logout))
        .route("/addstore", post(stores::add))
        .route("/add", post(queues::add))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Build the application with its middleware stack.
///
/// Sentry layers are left to the caller so tests can run without a client.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.pool(), state.config());

    routes()
        .layer(session_layer)
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

/// Turn a service outcome into a notice redirect.
///
/// Domain failures go back to `failure_path` with their error code;
/// infrastructure failures become an `AppError`.
fn notice_redirect<T>(
    outcome: std::result::Result<T, ServiceError>,
    success: Notice,
    success_path: &str,
    failure_path: &str,
) -> Result<Redirect> {
    match outcome {
        Ok(_) => Ok(success.redirect(success_path)),
        Err(ServiceError::Domain(err)) => Ok(Notice::from(err).redirect(failure_path)),
        Err(err) => Err(err.into()),
    }
}
