//! Store trait definitions.

use async_trait::async_trait;
use deyal_core::{DeyalResult, Interface, UserId};
use deyal_domain::User;

/// User store trait.
///
/// Implementations own the persisted `User` aggregates. Callers get copies
/// and write whole aggregates back.
#[async_trait]
pub trait UserStore: Interface + Send + Sync {
    /// Returns every user in the store's natural order.
    async fn find_all(&self) -> DeyalResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> DeyalResult<Option<User>>;

    /// Finds a user by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> DeyalResult<Option<User>>;

    /// Inserts a new user.
    ///
    /// Fails with `Conflict` when a user with the same ID exists.
    async fn insert(&self, user: &User) -> DeyalResult<User>;

    /// Inserts or replaces a user, bumping its version.
    ///
    /// When a stored record exists its version must equal `user.version`,
    /// otherwise the save fails with `ConcurrentModification`.
    async fn save(&self, user: &User) -> DeyalResult<User>;

    /// Deletes a user by ID. Returns whether a record was removed.
    async fn delete(&self, id: UserId) -> DeyalResult<bool>;
}
