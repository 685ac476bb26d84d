use serde::{Deserialize, Serialize};

/// Weighting used by a rater type that never declares its own.
pub const DEFAULT_WEIGHTING: f64 = 1.0;

/// Bounds that every rater's output must respect.
///
/// One instance is shared by all values of a rateable type. Fields missing
/// from a config file fall back to the defaults individually.
///
/// Example YAML:
/// ```yaml
/// min_rating: 0
/// max_rating: 5
/// min_weighting: 0.0
/// max_weighting: 1.0
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Lowest accepted rating, also the result when there are no raters (default: 0.0)
    pub min_rating: f64,

    /// Highest accepted rating (default: 10.0)
    pub max_rating: f64,

    /// Lowest accepted weighting (default: 0.0)
    pub min_weighting: f64,

    /// Highest accepted weighting (default: 1.0)
    pub max_weighting: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            min_rating: 0.0,
            max_rating: 10.0,
            min_weighting: 0.0,
            max_weighting: 1.0,
        }
    }
}

impl Configuration {
    pub fn new(min_rating: f64, max_rating: f64, min_weighting: f64, max_weighting: f64) -> Self {
        Self {
            min_rating,
            max_rating,
            min_weighting,
            max_weighting,
        }
    }

    /// Inclusive on both ends. NaN is never accepted.
    pub fn accepts_rating(&self, rating: f64) -> bool {
        (self.min_rating..=self.max_rating).contains(&rating)
    }

    /// Inclusive on both ends. NaN is never accepted.
    pub fn accepts_weighting(&self, weighting: f64) -> bool {
        (self.min_weighting..=self.max_weighting).contains(&weighting)
    }
}
