//! State transitions applied to a user's [`MissionInfo`].
//!
//! [`RequestType`] is the flat wire enum; these two closed enums split it by
//! what they touch, each with its own `apply`.

use crate::entities::MissionInfo;
use crate::value_objects::RequestType;
use deyal_core::{DeyalError, MissionId};
use serde::{Deserialize, Serialize};

/// Number of single decreases applied by [`RatingTransition::ClientDecreaseMore`].
pub const DECREASE_MORE_STEPS: usize = 3;

/// Mission status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionTransition {
    /// The user posted the mission.
    Create,
    /// The user started working on the mission.
    Ongoing,
    /// The mission finished successfully.
    Completed,
    /// The mission finished unsuccessfully.
    Failed,
}

impl MissionTransition {
    /// Applies the transition and returns whether `info` changed.
    ///
    /// A mission already registered as created, completed or failed is left
    /// alone, as is a create or ongoing request for a mission that is already
    /// ongoing. Completed and failed take the mission out of ongoing when it
    /// is there.
    pub fn apply(self, info: &mut MissionInfo, mission_id: &MissionId) -> bool {
        if info.is_registered_outside_ongoing(mission_id) {
            return false;
        }

        match self {
            Self::Create | Self::Ongoing if info.ongoing.contains(mission_id) => false,
            Self::Create => {
                info.created.push(mission_id.clone());
                true
            }
            Self::Ongoing => {
                info.ongoing.push(mission_id.clone());
                true
            }
            Self::Completed => {
                info.remove_ongoing(mission_id);
                info.completed.push(mission_id.clone());
                true
            }
            Self::Failed => {
                info.remove_ongoing(mission_id);
                info.failed.push(mission_id.clone());
                true
            }
        }
    }
}

impl TryFrom<RequestType> for MissionTransition {
    type Error = DeyalError;

    fn try_from(kind: RequestType) -> Result<Self, Self::Error> {
        match kind {
            RequestType::Create => Ok(Self::Create),
            RequestType::Ongoing => Ok(Self::Ongoing),
            RequestType::Completed => Ok(Self::Completed),
            RequestType::Failed => Ok(Self::Failed),
            other => Err(DeyalError::validation(format!("{other} is not a mission status change"))),
        }
    }
}

impl From<MissionTransition> for RequestType {
    fn from(transition: MissionTransition) -> Self {
        match transition {
            MissionTransition::Create => Self::Create,
            MissionTransition::Ongoing => Self::Ongoing,
            MissionTransition::Completed => Self::Completed,
            MissionTransition::Failed => Self::Failed,
        }
    }
}

/// Rating change for one of the user's roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingTransition {
    ClientIncrease,
    ClientDecrease,
    /// Three single client decreases in a row, each clamped on its own.
    ClientDecreaseMore,
    ContractorIncrease,
    ContractorDecrease,
}

impl RatingTransition {
    /// Applies the rating change to `info`.
    pub fn apply(self, info: &mut MissionInfo) {
        match self {
            Self::ClientIncrease => info.client_rating.increase(),
            Self::ClientDecrease => info.client_rating.decrease(),
            Self::ClientDecreaseMore => {
                for _ in 0..DECREASE_MORE_STEPS {
                    info.client_rating.decrease();
                }
            }
            Self::ContractorIncrease => info.contractor_rating.increase(),
            Self::ContractorDecrease => info.contractor_rating.decrease(),
        }
    }
}

impl TryFrom<RequestType> for RatingTransition {
    type Error = DeyalError;

    fn try_from(kind: RequestType) -> Result<Self, Self::Error> {
        match kind {
            RequestType::ClientIncrease => Ok(Self::ClientIncrease),
            RequestType::ClientDecrease => Ok(Self::ClientDecrease),
            RequestType::ClientDecreaseMore => Ok(Self::ClientDecreaseMore),
            RequestType::ContractorIncrease => Ok(Self::ContractorIncrease),
            RequestType::ContractorDecrease => Ok(Self::ContractorDecrease),
            other => Err(DeyalError::validation(format!("{other} is not a rating change"))),
        }
    }
}

impl From<RatingTransition> for RequestType {
    fn from(transition: RatingTransition) -> Self {
        match transition {
            RatingTransition::ClientIncrease => Self::ClientIncrease,
            RatingTransition::ClientDecrease => Self::ClientDecrease,
            RatingTransition::ClientDecreaseMore => Self::ClientDecreaseMore,
            RatingTransition::ContractorIncrease => Self::ContractorIncrease,
            RatingTransition::ContractorDecrease => Self::ContractorDecrease,
        }
    }
}
