use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tower_cookies::Cookies;

use crate::{
    error::Result,
    middleware_layer::auth::extract_session_token,
    models::user::{User, UserInfo},
    state::AppState,
};

/// The role-branched payload behind the access gate.
#[derive(Serialize)]
pub struct LandingResponse {
    /// The identity the session resolved to.
    pub user: UserInfo,
    /// The full user roster. Present only for admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserInfo>>,
}

/// Serves the landing view data for an authenticated user.
///
/// Admins receive the full user enumeration; regular users receive only
/// their own identity. Read-only - the gate has already resolved the
/// session and no session state changes here.
#[axum::debug_handler]
pub async fn landing(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Response> {
    let users = if user.is_admin() {
        let roster = state.users.all()?;
        tracing::debug!("👥 Admin landing: enumerating {} users", roster.len());
        Some(roster.iter().map(UserInfo::from).collect())
    } else {
        None
    };

    let response = LandingResponse {
        user: UserInfo::from(&user),
        users,
    };

    Ok(Json(response).into_response())
}

/// Entry redirect: a caller with a live session goes to the landing view,
/// everyone else to the login entry point.
#[axum::debug_handler]
pub async fn index(State(state): State<AppState>, cookies: Cookies) -> Result<Response> {
    if let Some(session_token) = extract_session_token(&cookies) {
        if state.sessions.resolve(&session_token)?.is_some() {
            return Ok(Redirect::to("/landing").into_response());
        }
    }

    Ok(Redirect::to("/login").into_response())
}
