//! User store interface and in-memory implementation.
//!
//! Persistence is an external collaborator; the issuer only ever needs
//! lookup and insert against this trait.

use std::collections::HashMap;
use std::sync::RwLock;

/// A user account as the issuer sees it.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    /// bcrypt hash, never the plaintext
    pub password_hash: String,
    pub roles: Vec<String>,
}

/// Interface to the user directory backing credential checks.
pub trait UserStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> Option<UserRecord>;

    /// Insert a new account. Returns `false` if the username is taken.
    fn insert(&self, record: UserRecord) -> bool;
}

/// Map-backed store used by the binary and the tests.
///
/// The lock exists only because `register` inserts; every request-path
/// read is a cheap clone under the read half.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_username(&self, username: &str) -> Option<UserRecord> {
        self.users
            .read()
            .expect("user store lock poisoned")
            .get(username)
            .cloned()
    }

    fn insert(&self, record: UserRecord) -> bool {
        let mut users = self.users.write().expect("user store lock poisoned");
        if users.contains_key(&record.username) {
            return false;
        }
        users.insert(record.username.clone(), record);
        true
    }
}
