//! Registration, login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use einkauf_core::CurrentMember;

use super::notice_redirect;
use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::SessionContext;
use crate::notice::{MessageQuery, Notice};
use crate::services::{CredentialStore, ServiceError, SessionGate};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data. Missing fields count as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Registration form data. Missing fields count as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub member: String,
    pub password: String,
    pub password2: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub notice: Option<Notice>,
    pub member: Option<CurrentMember>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub notice: Option<Notice>,
    pub member: Option<CurrentMember>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
pub async fn login_page(ctx: SessionContext, Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        notice: Notice::from_query(&query),
        member: ctx.state().current().cloned(),
    }
}

/// Handle login form submission.
///
/// On success the session gets a fresh ID before the member is stored in it.
pub async fn login(
    State(state): State<AppState>,
    mut ctx: SessionContext,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let gate = SessionGate::new(state.pool());

    match gate
        .login(ctx.state_mut(), &form.username, &form.password)
        .await
    {
        Ok(member) => {
            ctx.commit_with_new_id().await?;
            set_sentry_user(&member.id, member.username.as_str());
            Ok(Notice::LoggedIn.redirect("/"))
        }
        Err(ServiceError::Domain(err)) => Ok(Notice::from(err).redirect("/login")),
        Err(err) => Err(err.into()),
    }
}

/// Display the registration page.
pub async fn register_page(
    ctx: SessionContext,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    RegisterTemplate {
        notice: Notice::from_query(&query),
        member: ctx.state().current().cloned(),
    }
}

/// Handle registration form submission. Does not log the new member in.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect> {
    let outcome = CredentialStore::new(state.pool())
        .register(&form.member, &form.password, &form.password2)
        .await;

    notice_redirect(outcome, Notice::Registered, "/login", "/register")
}

/// Log out. Succeeds for anonymous sessions too.
pub async fn logout(mut ctx: SessionContext) -> Result<Redirect> {
    SessionGate::logout(ctx.state_mut());
    ctx.destroy().await?;
    clear_sentry_user();

    Ok(Notice::LoggedOut.redirect("/"))
}
