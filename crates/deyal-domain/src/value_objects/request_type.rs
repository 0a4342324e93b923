//! Mutation intents accepted by the user manager.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire-level request kind.
///
/// Callers send one of these; the service splits it into a
/// [`MissionTransition`](crate::MissionTransition) or a
/// [`RatingTransition`](crate::RatingTransition) before acting on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    Create,
    Ongoing,
    Completed,
    Failed,
    ClientIncrease,
    ClientDecrease,
    ClientDecreaseMore,
    ContractorIncrease,
    ContractorDecrease,
}

impl RequestType {
    /// All request kinds, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Create,
        Self::Ongoing,
        Self::Completed,
        Self::Failed,
        Self::ClientIncrease,
        Self::ClientDecrease,
        Self::ClientDecreaseMore,
        Self::ContractorIncrease,
        Self::ContractorDecrease,
    ];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Ongoing => "ONGOING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::ClientIncrease => "CLIENT_INCREASE",
            Self::ClientDecrease => "CLIENT_DECREASE",
            Self::ClientDecreaseMore => "CLIENT_DECREASE_MORE",
            Self::ContractorIncrease => "CONTRACTOR_INCREASE",
            Self::ContractorDecrease => "CONTRACTOR_DECREASE",
        }
    }

    /// Returns true for the mission-status kinds.
    #[must_use]
    pub const fn is_mission_status(&self) -> bool {
        matches!(self, Self::Create | Self::Ongoing | Self::Completed | Self::Failed)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown request type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("client_decrease_more".parse::<RequestType>().unwrap(), RequestType::ClientDecreaseMore);
        assert_eq!("ONGOING".parse::<RequestType>().unwrap(), RequestType::Ongoing);
        assert!("PROMOTE".parse::<RequestType>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&RequestType::ContractorIncrease).unwrap();
        assert_eq!(json, "\"CONTRACTOR_INCREASE\"");
        for kind in RequestType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_mission_status_family() {
        let missions: Vec<_> = RequestType::ALL.into_iter().filter(RequestType::is_mission_status).collect();
        assert_eq!(
            missions,
            vec![RequestType::Create, RequestType::Ongoing, RequestType::Completed, RequestType::Failed]
        );
    }
}
