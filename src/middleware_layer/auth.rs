use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;

use crate::{
    error::{AppError, Result},
    state::AppState,
};

/// The cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session_id";

/// Extracts the session token from the request cookies.
///
/// # Arguments
///
/// * `cookies` - The request cookies.
///
/// # Returns
///
/// An `Option` containing the token if found.
pub fn extract_session_token(cookies: &Cookies) -> Option<String> {
    cookies
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// A middleware that requires a valid session to be present.
///
/// Resolves the cookie's token through the session manager, which re-reads
/// the user from the credential store, and attaches the resolved `User` as a
/// request extension. A missing, destroyed, or orphaned session redirects
/// the caller to the login entry point instead of rendering protected
/// content. The check is read-only; no session state is mutated.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `cookies` - The request cookies.
/// * `request` - The incoming request.
/// * `next` - The next middleware in the chain.
///
/// # Returns
///
/// A `Response`, or `Unauthenticated` which renders as a redirect to
/// `/login`.
pub async fn require_auth(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    tracing::debug!("🔐 Checking authentication...");

    let session_token = extract_session_token(&cookies).ok_or(AppError::Unauthenticated)?;

    let user = state
        .sessions
        .resolve(&session_token)?
        .ok_or(AppError::Unauthenticated)?;

    tracing::debug!("✅ User authenticated: {}", user.id);

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
