//! Gatehouse - credential authentication and session gating
//!
//! Users authenticate with email + password, receive an opaque
//! server-tracked session token in a cookie, and later requests are
//! authorized against that session with role-based view branching. This is
//! the library interface so the binary and the integration tests drive the
//! same router and core services.

use std::time::Duration;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use http::{Method, header};
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod state;

pub mod crypto {
    pub mod password;
    pub mod token;
}

pub mod models {
    pub mod session;
    pub mod user;
}

pub mod repositories {
    pub mod user;
}

pub mod services {
    pub mod auth;
    pub mod session;
}

pub mod handlers {
    pub mod auth;
    pub mod landing;
}

pub mod middleware_layer {
    pub mod auth;
}

pub mod validation {
    pub mod auth;
}

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;

/// Builds the application router.
///
/// `/landing` sits behind the access gate; `/logout` deliberately does not,
/// so it stays an unconditional, idempotent destroy.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse().unwrap(),
            "http://127.0.0.1:3000".parse().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::COOKIE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(86400));

    let public_routes = Router::new()
        .route("/", get(handlers::landing::index))
        .route("/login", post(handlers::auth::login))
        .route("/signup", post(handlers::auth::signup))
        .route("/logout", post(handlers::auth::logout))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/landing", get(handlers::landing::landing))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CookieManagerLayer::new())
        .layer(cors)
}
