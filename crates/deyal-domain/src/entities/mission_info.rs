//! Mission bookkeeping carried by every user.

use crate::value_objects::Rating;
use deyal_core::MissionId;
use serde::{Deserialize, Serialize};

/// Missions a user is involved in, grouped by status, plus the user's
/// ratings in the client and contractor roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionInfo {
    /// Missions the user posted.
    pub created: Vec<MissionId>,
    /// Missions the user is currently working on.
    pub ongoing: Vec<MissionId>,
    /// Missions that finished successfully.
    pub completed: Vec<MissionId>,
    /// Missions that finished unsuccessfully.
    pub failed: Vec<MissionId>,
    /// Rating earned as the party that posts missions.
    pub client_rating: Rating,
    /// Rating earned as the party that carries missions out.
    pub contractor_rating: Rating,
}

impl MissionInfo {
    /// Returns true when the mission is already registered as created,
    /// completed or failed.
    ///
    /// Ongoing is left out so an ongoing mission can still move on to
    /// completed or failed.
    #[must_use]
    pub fn is_registered_outside_ongoing(&self, mission_id: &MissionId) -> bool {
        self.created.contains(mission_id) || self.completed.contains(mission_id) || self.failed.contains(mission_id)
    }

    /// Returns true when the mission appears in any status list.
    #[must_use]
    pub fn contains(&self, mission_id: &MissionId) -> bool {
        self.ongoing.contains(mission_id) || self.is_registered_outside_ongoing(mission_id)
    }

    /// Removes the mission from ongoing; returns whether it was there.
    pub fn remove_ongoing(&mut self, mission_id: &MissionId) -> bool {
        let before = self.ongoing.len();
        self.ongoing.retain(|id| id != mission_id);
        self.ongoing.len() != before
    }

    /// Total number of missions across all status lists.
    #[must_use]
    pub fn mission_count(&self) -> usize {
        self.created.len() + self.ongoing.len() + self.completed.len() + self.failed.len()
    }
}
