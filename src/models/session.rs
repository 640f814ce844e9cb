use chrono::{DateTime, Utc};

/// Represents a user session.
///
/// Holds a weak reference to the user (the id, not a copy of the record):
/// authorization checks re-resolve the current `User` from the credential
/// store, so an out-of-band role change is visible on the next request.
#[derive(Debug, Clone)]
pub struct Session {
    /// The opaque, unguessable token issued to the client.
    pub token: String,
    /// The ID of the user this session belongs to.
    pub user_id: i64,
    /// The timestamp when the session was created.
    pub created_at: DateTime<Utc>,
}
