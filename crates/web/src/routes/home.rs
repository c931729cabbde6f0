//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use einkauf_core::CurrentMember;

use crate::error::Result;
use crate::filters;
use crate::middleware::SessionContext;
use crate::models::{QueueListing, Store};
use crate::notice::{MessageQuery, Notice};
use crate::services::{QueueRegistry, StoreRegistry};
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub notice: Option<Notice>,
    pub member: Option<CurrentMember>,
    pub stores: Vec<Store>,
    pub queues: Vec<QueueListing>,
}

/// Display stores and queues.
///
/// Anonymous sessions only get the gating message; the registries are not
/// queried.
pub async fn index(
    State(state): State<AppState>,
    ctx: SessionContext,
    Query(query): Query<MessageQuery>,
) -> Result<impl IntoResponse> {
    let notice = Notice::from_query(&query);

    let Some(member) = ctx.state().current().cloned() else {
        return Ok(IndexTemplate {
            notice,
            member: None,
            stores: Vec::new(),
            queues: Vec::new(),
        });
    };

    let stores = StoreRegistry::new(state.pool()).list_stores().await?;
    let queues = QueueRegistry::new(state.pool()).list_queues().await?;

    Ok(IndexTemplate {
        notice,
        member: Some(member),
        stores,
        queues,
    })
}
