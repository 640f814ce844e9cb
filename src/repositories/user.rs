use std::sync::RwLock;

use chrono::Utc;

use crate::{
    error::{AppError, Result},
    models::user::{NewUser, User},
};

/// Abstract user registry.
///
/// The authenticator and session manager only ever see this trait; the
/// in-memory implementation below can be swapped for a transactional store
/// without touching either. Implementations must keep id, username, and
/// email unique for the lifetime of the store, including under concurrent
/// inserts.
pub trait CredentialStore: Send + Sync {
    /// Finds a user by their email address.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Finds a user by their username.
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Finds a user by their ID.
    fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Inserts a new user, assigning its id.
    ///
    /// Fails with `DuplicateEmail` or `DuplicateUsername` when a uniqueness
    /// key is already taken. The check happens atomically with the insert,
    /// so two racing registrations cannot both succeed.
    fn insert(&self, new_user: NewUser) -> Result<User>;

    /// Returns every registered user, in insertion order.
    fn all(&self) -> Result<Vec<User>>;
}

struct StoreInner {
    next_id: i64,
    users: Vec<User>,
}

/// In-process `CredentialStore` backed by an `RwLock`'d table.
///
/// Reads take the shared lock; `insert` re-checks both uniqueness keys under
/// the exclusive lock before appending, which closes the check-then-act race
/// left open by any caller-side pre-check.
pub struct InMemoryCredentialStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                next_id: 1,
                users: Vec::new(),
            }),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|_| AppError::StoreFault("credential store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|_| AppError::StoreFault("credential store lock poisoned".to_string()))
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let inner = self.read()?;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let inner = self.read()?;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let inner = self.read()?;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    fn insert(&self, new_user: NewUser) -> Result<User> {
        let mut inner = self.write()?;

        // Uniqueness is decided here, under the write lock.
        if inner.users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::DuplicateEmail);
        }
        if inner.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::DuplicateUsername);
        }

        let user = User {
            id: inner.next_id,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.users.push(user.clone());

        tracing::debug!("User inserted with ID: {}", user.id);
        Ok(user)
    }

    fn all(&self) -> Result<Vec<User>> {
        let inner = self.read()?;
        Ok(inner.users.clone())
    }
}
