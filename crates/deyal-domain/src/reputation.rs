//! Aggregate reputation score.

use crate::entities::MissionInfo;
use crate::value_objects::{RATING_INITIAL, RATING_MAX, RATING_MIN};
use serde::{Deserialize, Serialize};

/// Highest reputation score.
pub const REPUTATION_MAX: u8 = 100;

/// Weights given to each role's rating when computing the reputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationPolicy {
    /// Weight of the client rating.
    pub client_weight: f64,
    /// Weight of the contractor rating.
    pub contractor_weight: f64,
}

impl Default for ReputationPolicy {
    fn default() -> Self {
        Self {
            client_weight: 1.0,
            contractor_weight: 1.0,
        }
    }
}

/// Computes a user's reputation on a `0..=100` scale.
///
/// The score is the weighted mean of the client and contractor ratings,
/// mapped from the rating range onto `0..=100` and rounded. Weights that
/// are negative or not finite count as zero; when no weight remains the
/// unrated starting value is used.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn reputation_score(info: &MissionInfo, policy: &ReputationPolicy) -> u8 {
    let sanitize = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
    let client_weight = sanitize(policy.client_weight);
    let contractor_weight = sanitize(policy.contractor_weight);
    let total = client_weight + contractor_weight;

    let mean = if total > 0.0 {
        (f64::from(info.client_rating.value()) * client_weight
            + f64::from(info.contractor_rating.value()) * contractor_weight)
            / total
    } else {
        f64::from(RATING_INITIAL)
    };

    let span = f64::from(RATING_MAX - RATING_MIN);
    let normalised = (mean - f64::from(RATING_MIN)) / span * f64::from(REPUTATION_MAX);
    normalised.round().clamp(0.0, f64::from(REPUTATION_MAX)) as u8
}
