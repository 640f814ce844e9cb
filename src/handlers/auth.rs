use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tower_cookies::cookie::time::Duration;
use tower_cookies::{Cookie, Cookies};

use crate::{
    error::Result,
    middleware_layer::auth::{SESSION_COOKIE, extract_session_token},
    models::user::UserInfo,
    services::auth as auth_service,
    state::AppState,
};

/// The request payload for user login.
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The request payload for user signup.
#[derive(Deserialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// The response payload for authentication-related requests.
#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

/// The response payload for a successful signup.
#[derive(Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    pub user: UserInfo,
}

/// Creates a secure cookie with the given name and value.
///
/// The session cookie carries no max-age: the server-side session lives for
/// the process unless destroyed, and the cookie dies with the browser.
fn create_secure_cookie(name: String, value: String, is_production: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value);

    cookie.set_http_only(true);
    if is_production {
        cookie.set_secure(true);
    }
    cookie.set_same_site(tower_cookies::cookie::SameSite::Lax);
    cookie.set_path("/");

    cookie
}

/// Handles user login.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<Response> {
    tracing::info!("🔐 Login attempt for: {}", payload.email);

    let session = auth_service::login(
        state.users.as_ref(),
        &state.sessions,
        &payload.email,
        &payload.password,
    )?;

    let session_cookie = create_secure_cookie(
        SESSION_COOKIE.to_string(),
        session.token.clone(),
        state.config.is_production(),
    );
    cookies.add(session_cookie);
    tracing::info!("✅ Session cookie issued for user: {}", session.user_id);

    let response = AuthResponse {
        success: true,
        message: "Login successful".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles user signup.
///
/// Signup never auto-logs-in: the response carries the created identity and
/// the client proceeds to the login entry point.
#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Response> {
    tracing::info!("📝 Signup attempt for: {}", payload.email);

    let user = auth_service::register(
        state.users.as_ref(),
        &payload.email,
        &payload.username,
        &payload.password,
    )?;

    let response = SignupResponse {
        success: true,
        message: "Signup successful. Please log in.".to_string(),
        user: UserInfo::from(&user),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Handles user logout.
///
/// Unconditional and idempotent: destroying an absent or already-destroyed
/// session is a successful no-op, so this handler sits outside the access
/// gate.
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> Result<Response> {
    if let Some(session_token) = extract_session_token(&cookies) {
        state.sessions.destroy(&session_token)?;
        tracing::info!("👋 Logout: session destroyed");
    } else {
        tracing::debug!("👋 Logout without a session cookie, nothing to do");
    }

    let mut session_cookie = Cookie::new(SESSION_COOKIE, "");
    session_cookie.set_max_age(Duration::seconds(0));
    session_cookie.set_path("/");
    cookies.remove(session_cookie);

    let response = AuthResponse {
        success: true,
        message: "Logout successful".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}
