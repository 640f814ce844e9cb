use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

/// The application's error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required input field was left blank.
    #[error("{0} cannot be blank")]
    MissingField(&'static str),

    /// Login failed. Deliberately covers both "no such user" and
    /// "wrong password" so responses do not reveal which emails exist.
    #[error("Password or email is invalid")]
    InvalidCredential,

    /// Signup collided on the email column.
    #[error("Email already in use")]
    DuplicateEmail,

    /// Signup collided on the username column.
    #[error("Username already in use")]
    DuplicateUsername,

    /// No valid session accompanied a request to a protected route.
    #[error("Authentication required")]
    Unauthenticated,

    /// The credential store or session table is unavailable.
    #[error("Store fault: {0}")]
    StoreFault(String),

    /// An internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// A `Result` type that uses `AppError` as the error type.
pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingField(field) => {
                tracing::debug!("Validation error: {} is blank", field);
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            AppError::InvalidCredential => {
                tracing::warn!("❌ Login rejected");
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            AppError::DuplicateEmail | AppError::DuplicateUsername => {
                tracing::debug!("Signup collision: {}", self);
                (StatusCode::CONFLICT, self.to_string())
            }

            AppError::Unauthenticated => {
                tracing::debug!("❌ No valid session, redirecting to login");
                return Redirect::to("/login").into_response();
            }

            AppError::StoreFault(ref detail) => {
                tracing::error!("❌ Store fault: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }

            AppError::Internal(ref detail) => {
                tracing::error!("❌ Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = sonic_rs::to_string(&sonic_rs::json!({
            "error": message
        }))
        .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());

        (status, body).into_response()
    }
}
