//! User service trait definition.

use async_trait::async_trait;
use deyal_core::{DeyalResult, Interface, MissionId, UserId};
use deyal_domain::{MissionTransition, RatingTransition, User};
use std::collections::HashMap;

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Lists every user.
    async fn find_all_users(&self) -> DeyalResult<Vec<User>>;

    /// Deletes a user. Returns whether a record was removed.
    async fn delete_user(&self, user: &User) -> DeyalResult<bool>;

    /// Inserts a new user without further validation.
    async fn insert_user(&self, user: &User) -> DeyalResult<User>;

    /// Saves a whole user record without further validation.
    async fn update_user(&self, user: &User) -> DeyalResult<User>;

    /// Gets a user by email, ignoring case.
    async fn retrieve_user_by_email(&self, email: &str) -> DeyalResult<User>;

    /// Gets a user by ID.
    async fn retrieve_user_by_id(&self, id: UserId) -> DeyalResult<User>;

    /// Checks that an email is well formed and not yet registered.
    async fn validate_email(&self, email: &str) -> DeyalResult<()>;

    /// Maps every user ID to its username.
    async fn user_name_map(&self) -> DeyalResult<HashMap<UserId, String>>;

    /// Records a mission status change for a user.
    async fn add_mission_to_user(
        &self,
        user_id: UserId,
        mission_id: &MissionId,
        transition: MissionTransition,
    ) -> DeyalResult<()>;

    /// Changes one of a user's ratings and refreshes the reputation.
    async fn change_rating(&self, user_id: UserId, transition: RatingTransition) -> DeyalResult<()>;

    /// Appends a notification to a user.
    async fn add_notification_to_user(
        &self,
        user_id: UserId,
        message: &str,
        mission_id: Option<MissionId>,
    ) -> DeyalResult<()>;
}
