use std::sync::Arc;

use crate::config::Config;
use crate::crypto::password;
use crate::error::Result;
use crate::models::user::{NewUser, Role};
use crate::repositories::user::{CredentialStore, InMemoryCredentialStore};
use crate::services::session::SessionManager;

/// The application's state.
#[derive(Clone)]
pub struct AppState {
    /// The credential store.
    pub users: Arc<dyn CredentialStore>,
    /// The session manager.
    pub sessions: SessionManager,
    /// The application's configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// Builds the in-process credential store, seeds the bootstrap
    /// accounts, and wires the session manager to the store.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub fn new(config: &Config) -> Result<Self> {
        let users: Arc<dyn CredentialStore> = Arc::new(InMemoryCredentialStore::new());
        tracing::info!("✅ In-memory credential store initialized");

        seed_bootstrap_users(users.as_ref(), config)?;

        let sessions = SessionManager::new(Arc::clone(&users));
        tracing::info!("✅ Session manager initialized");

        Ok(AppState {
            users,
            sessions,
            config: config.clone(),
        })
    }
}

/// Seeds the two bootstrap accounts.
///
/// Their passwords go through the same Argon2 hashing as any registered
/// user's; only the digests are stored.
fn seed_bootstrap_users(store: &dyn CredentialStore, config: &Config) -> Result<()> {
    store.insert(NewUser {
        username: "AdminUser".to_string(),
        email: "admin@example.com".to_string(),
        password_hash: password::hash_password(&config.seed_admin_password)?,
        role: Role::Admin,
    })?;

    store.insert(NewUser {
        username: "RegularUser".to_string(),
        email: "user@example.com".to_string(),
        password_hash: password::hash_password(&config.seed_user_password)?,
        role: Role::Regular,
    })?;

    tracing::info!("✅ Credential store seeded with bootstrap accounts");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_seeds_admin_and_regular() {
        let config = Config::default();
        let state = AppState::new(&config).unwrap();

        let admin = state
            .users
            .find_by_email("admin@example.com")
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.username, "AdminUser");

        let regular = state
            .users
            .find_by_email("user@example.com")
            .unwrap()
            .unwrap();
        assert_eq!(regular.role, Role::Regular);

        assert_eq!(state.users.all().unwrap().len(), 2);
        assert_eq!(state.sessions.session_count(), 0);
    }
}
