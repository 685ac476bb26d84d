use thiserror::Error;

/// Raised when a rater produces output the configuration does not allow.
///
/// Values render with `f64`'s `Display`, so integral values read as `11`
/// rather than `11.0`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("Rating {value} is invalid from {rater}")]
    InvalidRating { value: f64, rater: String },

    #[error("Weighting {value} is invalid from {rater}")]
    InvalidWeighting { value: f64, rater: String },

    #[error("Total weighting of {raters} rater(s) is zero, rating is undefined")]
    ZeroTotalWeighting { raters: usize },
}

impl RatingError {
    /// Name of the rater that caused the failure, if a single one did.
    pub fn rater(&self) -> Option<&str> {
        match self {
            RatingError::InvalidRating { rater, .. } | RatingError::InvalidWeighting { rater, .. } => {
                Some(rater)
            }
            RatingError::ZeroTotalWeighting { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rating_message() {
        let err = RatingError::InvalidRating {
            value: 11.0,
            rater: "GoreRater".to_string(),
        };
        assert_eq!(err.to_string(), "Rating 11 is invalid from GoreRater");
    }

    #[test]
    fn test_invalid_weighting_message_keeps_fraction() {
        let err = RatingError::InvalidWeighting {
            value: 1.1,
            rater: "ErrorRater".to_string(),
        };
        assert_eq!(err.to_string(), "Weighting 1.1 is invalid from ErrorRater");
    }

    #[test]
    fn test_rater_accessor() {
        let err = RatingError::InvalidRating {
            value: -1.0,
            rater: "BadRater".to_string(),
        };
        assert_eq!(err.rater(), Some("BadRater"));
        assert_eq!(RatingError::ZeroTotalWeighting { raters: 2 }.rater(), None);
    }
}
