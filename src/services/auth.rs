use crate::{
    crypto::password,
    error::{AppError, Result},
    models::{
        session::Session,
        user::{NewUser, Role, User},
    },
    repositories::user::CredentialStore,
    services::session::SessionManager,
    validation::auth::{validate_login, validate_signup},
};

/// Authenticates a credential and establishes a session.
///
/// An unknown email and a wrong password fail with the same
/// `InvalidCredential` value, so responses cannot be used to probe which
/// emails are registered.
///
/// # Arguments
///
/// * `store` - The credential store.
/// * `sessions` - The session manager.
/// * `email` - The submitted email address.
/// * `password` - The submitted plaintext password.
///
/// # Returns
///
/// A `Result` containing the established `Session`.
pub fn login(
    store: &dyn CredentialStore,
    sessions: &SessionManager,
    email: &str,
    password: &str,
) -> Result<Session> {
    validate_login(email, password)?;
    tracing::debug!("🔐 Login attempt for: {}", email);

    let user = store
        .find_by_email(email)?
        .ok_or(AppError::InvalidCredential)?;

    if !password::verify_password(password, &user.password_hash)? {
        return Err(AppError::InvalidCredential);
    }

    let session = sessions.create(user.id)?;
    tracing::info!("✅ User authenticated: {}", user.id);
    Ok(session)
}

/// Registers a new user with the regular role.
///
/// The friendly duplicate pre-checks give signup its distinguishable
/// `DuplicateEmail` / `DuplicateUsername` answers; the store's insert
/// re-checks both keys atomically, so racing registrations cannot both
/// land. Registration does not establish a session - the client proceeds
/// to login.
///
/// # Arguments
///
/// * `store` - The credential store.
/// * `email` - The new user's email address.
/// * `username` - The new user's username.
/// * `password` - The new user's plaintext password.
///
/// # Returns
///
/// A `Result` containing the created `User`.
pub fn register(
    store: &dyn CredentialStore,
    email: &str,
    username: &str,
    password: &str,
) -> Result<User> {
    validate_signup(email, username, password)?;
    tracing::debug!("📝 Signup attempt for: {}", email);

    if store.find_by_email(email)?.is_some() {
        return Err(AppError::DuplicateEmail);
    }
    if store.find_by_username(username)?.is_some() {
        return Err(AppError::DuplicateUsername);
    }

    let password_hash = password::hash_password(password)?;
    let user = store.insert(NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash,
        role: Role::Regular,
    })?;

    tracing::info!("✅ User registered with ID: {}", user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user::InMemoryCredentialStore;
    use std::sync::Arc;

    fn harness() -> (Arc<dyn CredentialStore>, SessionManager) {
        let store: Arc<dyn CredentialStore> = Arc::new(InMemoryCredentialStore::new());
        let sessions = SessionManager::new(Arc::clone(&store));
        (store, sessions)
    }

    #[test]
    fn register_then_login() {
        let (store, sessions) = harness();
        let user = register(store.as_ref(), "a@b.com", "bob", "correct horse").unwrap();
        assert_eq!(user.role, Role::Regular);
        assert_eq!(user.id, 1);

        let session = login(store.as_ref(), &sessions, "a@b.com", "correct horse").unwrap();
        assert_eq!(session.user_id, user.id);
        assert_eq!(sessions.resolve(&session.token).unwrap().unwrap().id, 1);
    }

    #[test]
    fn unknown_email_and_wrong_password_fail_identically() {
        let (store, sessions) = harness();
        register(store.as_ref(), "a@b.com", "bob", "right-password").unwrap();

        let unknown = login(store.as_ref(), &sessions, "ghost@b.com", "whatever").unwrap_err();
        let wrong = login(store.as_ref(), &sessions, "a@b.com", "wrong-password").unwrap_err();

        assert!(matches!(unknown, AppError::InvalidCredential));
        assert!(matches!(wrong, AppError::InvalidCredential));
        // Neither path leaks through the rendered message either.
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[test]
    fn login_rejects_blank_fields() {
        let (store, sessions) = harness();
        assert!(matches!(
            login(store.as_ref(), &sessions, "", "x"),
            Err(AppError::MissingField("Email"))
        ));
        assert!(matches!(
            login(store.as_ref(), &sessions, "a@b.com", ""),
            Err(AppError::MissingField("Password"))
        ));
    }

    #[test]
    fn duplicate_email_registration_fails() {
        let (store, _sessions) = harness();
        register(store.as_ref(), "a@b.com", "bob", "x").unwrap();
        let err = register(store.as_ref(), "a@b.com", "carol", "y").unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
    }

    #[test]
    fn duplicate_username_registration_fails() {
        let (store, _sessions) = harness();
        register(store.as_ref(), "a@b.com", "bob", "x").unwrap();
        let err = register(store.as_ref(), "c@d.com", "bob", "y").unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername));
    }

    #[test]
    fn login_survives_malformed_stored_hash() {
        let (store, sessions) = harness();
        store
            .insert(NewUser {
                username: "broken".to_string(),
                email: "broken@b.com".to_string(),
                password_hash: "not-a-phc-string".to_string(),
                role: Role::Regular,
            })
            .unwrap();

        let err = login(store.as_ref(), &sessions, "broken@b.com", "anything").unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential));
    }
}
