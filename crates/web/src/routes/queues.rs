//! Queue route handlers.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;

use super::notice_redirect;
use crate::error::Result;
use crate::middleware::SessionContext;
use crate::notice::Notice;
use crate::services::QueueRegistry;
use crate::state::AppState;

/// Add-queue form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddQueueForm {
    pub title: String,
    pub deadline: String,
    /// ID of the selected store.
    pub store: String,
}

/// Add a queue.
pub async fn add(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<AddQueueForm>,
) -> Result<Redirect> {
    let outcome = QueueRegistry::new(state.pool())
        .add_queue(ctx.state(), &form.title, &form.deadline, &form.store)
        .await;

    notice_redirect(outcome, Notice::QueueAdded, "/", "/")
}
