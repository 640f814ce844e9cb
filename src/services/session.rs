use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    crypto::token,
    error::{AppError, Result},
    models::{session::Session, user::User},
    repositories::user::CredentialStore,
};

/// In-process session table mapping opaque tokens to user identities.
///
/// Sessions live for the server process unless explicitly destroyed; there
/// is no TTL. Lookups are read-mostly and take the shared lock; create and
/// destroy serialize on the exclusive lock.
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    store: Arc<dyn CredentialStore>,
}

impl SessionManager {
    /// Creates a session manager resolving identities against `store`.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            store,
        }
    }

    /// Establishes a new session for `user_id` and returns it.
    ///
    /// The token is 32 bytes from the OS CSPRNG; the caller transports it to
    /// the client (cookie attachment happens at the boundary, not here).
    pub fn create(&self, user_id: i64) -> Result<Session> {
        let session = Session {
            token: token::generate_session_token(),
            user_id,
            created_at: chrono::Utc::now(),
        };

        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| AppError::StoreFault("session table lock poisoned".to_string()))?;
        sessions.insert(session.token.clone(), session.clone());

        tracing::debug!("🔑 Session established for user: {}", user_id);
        Ok(session)
    }

    /// Resolves a token to the current `User`, or `None`.
    ///
    /// The user record is re-read from the credential store on every call;
    /// the session only pins the id, so a role changed out-of-band is
    /// honored at the next check. A destroyed token never resolves again.
    pub fn resolve(&self, session_token: &str) -> Result<Option<User>> {
        let user_id = {
            let sessions = self
                .sessions
                .read()
                .map_err(|_| AppError::StoreFault("session table lock poisoned".to_string()))?;
            match sessions.get(session_token) {
                Some(session) => session.user_id,
                None => return Ok(None),
            }
        };

        self.store.find_by_id(user_id)
    }

    /// Destroys a session. Idempotent: an absent or already-destroyed token
    /// is not an error.
    pub fn destroy(&self, session_token: &str) -> Result<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| AppError::StoreFault("session table lock poisoned".to_string()))?;
        if sessions.remove(session_token).is_some() {
            tracing::debug!("👋 Session destroyed");
        }
        Ok(())
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            store: Arc::clone(&self.store),
        }
    }
}
