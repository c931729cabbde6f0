//! Store route handlers.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;

use super::notice_redirect;
use crate::error::Result;
use crate::middleware::SessionContext;
use crate::notice::Notice;
use crate::services::StoreRegistry;
use crate::state::AppState;

/// Add-store form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddStoreForm {
    pub name: String,
    /// Comma-separated ordering URLs.
    pub urls: String,
    pub minorder: String,
}

/// Add a store.
pub async fn add(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<AddStoreForm>,
) -> Result<Redirect> {
    let outcome = StoreRegistry::new(state.pool())
        .add_store(ctx.state(), &form.name, &form.urls, &form.minorder)
        .await;

    notice_redirect(outcome, Notice::StoreAdded, "/", "/")
}
