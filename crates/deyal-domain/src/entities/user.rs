//! User aggregate.

use super::{MissionInfo, Notification};
use crate::reputation::{reputation_score, ReputationPolicy};
use crate::transitions::{MissionTransition, RatingTransition};
use crate::value_objects::Email;
use chrono::{DateTime, Utc};
use deyal_core::{Entity, MissionId, UserId, Versioned};
use serde::{Deserialize, Serialize};

fn default_reputation() -> u8 {
    reputation_score(&MissionInfo::default(), &ReputationPolicy::default())
}

/// User aggregate: identity, mission bookkeeping, ratings and notifications.
///
/// Stores persist the whole aggregate; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Display name.
    pub username: String,

    /// User's email address.
    pub email: Email,

    /// Missions by status, and role ratings.
    #[serde(default)]
    pub mission_info: MissionInfo,

    /// Notifications, oldest first.
    #[serde(default)]
    pub notifications: Vec<Notification>,

    /// Reputation derived from the ratings in `mission_info`.
    #[serde(default = "default_reputation")]
    pub reputation: u8,

    /// Optimistic-concurrency token, managed by the store.
    #[serde(default)]
    pub version: u64,

    /// Account creation timestamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unrated user with no missions.
    #[must_use]
    pub fn new(username: impl Into<String>, email: Email) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            username: username.into(),
            email,
            mission_info: MissionInfo::default(),
            notifications: Vec::new(),
            reputation: default_reputation(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Registers a mission status change. Returns whether anything changed.
    pub fn apply_mission(&mut self, transition: MissionTransition, mission_id: &MissionId) -> bool {
        let changed = transition.apply(&mut self.mission_info, mission_id);
        if changed {
            self.touch();
        }
        changed
    }

    /// Applies a rating change and recomputes the reputation.
    pub fn apply_rating(&mut self, transition: RatingTransition, policy: &ReputationPolicy) {
        transition.apply(&mut self.mission_info);
        self.recalculate_reputation(policy);
        self.touch();
    }

    /// Recomputes `reputation` from the current ratings.
    pub fn recalculate_reputation(&mut self, policy: &ReputationPolicy) {
        self.reputation = reputation_score(&self.mission_info, policy);
    }

    /// Appends a notification.
    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

impl Versioned for User {
    fn version(&self) -> u64 {
        self.version
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new("alice", Email::new_unchecked("alice@example.com"))
    }

    #[test]
    fn test_new_user_defaults() {
        let user = create_test_user();
        assert_eq!(user.username, "alice");
        assert_eq!(user.reputation, 50);
        assert_eq!(user.version, 0);
        assert!(user.notifications.is_empty());
        assert_eq!(user.mission_info.mission_count(), 0);
    }

    #[test]
    fn test_apply_mission_touches_only_on_change() {
        let mut user = create_test_user();
        let m = MissionId::new("m1");
        assert!(user.apply_mission(MissionTransition::Create, &m));
        let stamp = user.updated_at;
        assert!(!user.apply_mission(MissionTransition::Create, &m));
        assert_eq!(user.updated_at, stamp);
    }

    #[test]
    fn test_apply_rating_recomputes_reputation() {
        let mut user = create_test_user();
        user.apply_rating(RatingTransition::ClientIncrease, &ReputationPolicy::default());
        // client 6, contractor 5 -> 55
        assert_eq!(user.reputation, 55);
    }

    #[test]
    fn test_push_notification_keeps_order() {
        let mut user = create_test_user();
        user.push_notification(Notification::new("first", None));
        user.push_notification(Notification::new("second", None));
        let messages: Vec<_> = user.notifications.iter().map(Notification::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_deserialize_minimal_user() {
        let id = UserId::new();
        let json = format!(r#"{{"id":"{id}","username":"bob","email":"Bob@Example.com"}}"#);
        let user: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.email.as_str(), "bob@example.com");
        assert_eq!(user.reputation, 50);
        assert_eq!(user.version, 0);
    }

    #[test]
    fn test_versioned() {
        let mut user = create_test_user();
        user.set_version(3);
        assert_eq!(Versioned::version(&user), 3);
        assert_eq!(Entity::id(&user), &user.id);
    }
}
