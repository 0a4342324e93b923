//! Per-role rating accumulator.

use serde::{Deserialize, Serialize};

/// Lowest value a rating can reach.
pub const RATING_MIN: u8 = 0;
/// Highest value a rating can reach.
pub const RATING_MAX: u8 = 10;
/// Rating of a user nobody has rated yet.
pub const RATING_INITIAL: u8 = 5;

/// A rating in `[RATING_MIN, RATING_MAX]`, moved one unit at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating, clamping out-of-range values.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(RATING_MIN, RATING_MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Moves the rating up one unit, stopping at the maximum.
    pub fn increase(&mut self) {
        if self.0 < RATING_MAX {
            self.0 += 1;
        }
    }

    /// Moves the rating down one unit, stopping at the minimum.
    pub fn decrease(&mut self) {
        if self.0 > RATING_MIN {
            self.0 -= 1;
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(RATING_INITIAL)
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (RATING_MIN..=RATING_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("rating {value} outside {RATING_MIN}..={RATING_MAX}"))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
