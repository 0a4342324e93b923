//! In-app notification.

use chrono::{DateTime, Utc};
use deyal_core::MissionId;
use serde::{Deserialize, Serialize};

/// A short message for a user, optionally about a mission.
///
/// Notifications are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    message: String,
    mission_id: Option<MissionId>,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification stamped with the current time.
    #[must_use]
    pub fn new(message: impl Into<String>, mission_id: Option<MissionId>) -> Self {
        Self {
            message: message.into(),
            mission_id,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn mission_id(&self) -> Option<&MissionId> {
        self.mission_id.as_ref()
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification() {
        let before = Utc::now();
        let n = Notification::new("Mission accepted", Some(MissionId::new("m1")));
        assert_eq!(n.message(), "Mission accepted");
        assert_eq!(n.mission_id(), Some(&MissionId::new("m1")));
        assert!(n.created_at() >= before);
    }

    #[test]
    fn test_notification_without_mission() {
        let n = Notification::new("Welcome", None);
        assert!(n.mission_id().is_none());
    }
}
