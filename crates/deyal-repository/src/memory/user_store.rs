//! `HashMap`-backed user store.

use crate::traits::UserStore;
use async_trait::async_trait;
use deyal_core::{DeyalError, DeyalResult, UserId, Versioned};
use deyal_domain::User;
use shaku::Component;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// In-memory user store with optimistic versioning.
///
/// `find_all` returns users ordered by creation time, then id.
#[derive(Component, Default)]
#[shaku(interface = UserStore)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the given users, kept as-is.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(index_users(users)),
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Returns true when the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

/// Keys users by id; a later duplicate replaces an earlier one.
#[must_use]
pub fn index_users(users: Vec<User>) -> HashMap<UserId, User> {
    users.into_iter().map(|user| (user.id, user)).collect()
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> DeyalResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.0.cmp(&b.id.0)));
        Ok(users)
    }

    async fn find_by_id(&self, id: UserId) -> DeyalResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DeyalResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.matches(email))
            .cloned())
    }

    async fn insert(&self, user: &User) -> DeyalResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(DeyalError::conflict(format!("User {} already exists", user.id)));
        }

        let mut stored = user.clone();
        stored.set_version(user.version() + 1);
        users.insert(stored.id, stored.clone());
        debug!("Inserted user {} at version {}", stored.id, stored.version);
        Ok(stored)
    }

    async fn save(&self, user: &User) -> DeyalResult<User> {
        let mut users = self.users.write().await;

        if let Some(current) = users.get(&user.id) {
            if current.version() != user.version() {
                warn!(
                    "Rejected stale save of user {}: expected version {}, found {}",
                    user.id,
                    user.version(),
                    current.version()
                );
                return Err(DeyalError::ConcurrentModification {
                    id: user.id.to_string(),
                    expected: user.version(),
                    actual: current.version(),
                });
            }
        }

        let mut stored = user.clone();
        stored.set_version(user.version() + 1);
        users.insert(stored.id, stored.clone());
        debug!("Saved user {} at version {}", stored.id, stored.version);
        Ok(stored)
    }

    async fn delete(&self, id: UserId) -> DeyalResult<bool> {
        Ok(self.users.write().await.remove(&id).is_some())
    }
}

impl std::fmt::Debug for InMemoryUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserStore").finish_non_exhaustive()
    }
}
