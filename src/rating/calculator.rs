use tracing::{debug, trace, warn};

use super::config::Configuration;
use super::error::RatingError;
use crate::rater::Rater;

/// Combines rater opinions into one weighted-average rating.
///
/// Raters are validated and summed in the order given. The first rater
/// outside the configured bounds aborts the calculation.
pub struct RatingCalculator<'a> {
    configuration: &'a Configuration,
    raters: &'a [Box<dyn Rater>],
}

impl<'a> RatingCalculator<'a> {
    /// Shorthand for `RatingCalculator::new(..).calculate_rating()`.
    pub fn rate(
        configuration: &'a Configuration,
        raters: &'a [Box<dyn Rater>],
    ) -> Result<f64, RatingError> {
        Self::new(configuration, raters).calculate_rating()
    }

    pub fn new(configuration: &'a Configuration, raters: &'a [Box<dyn Rater>]) -> Self {
        Self {
            configuration,
            raters,
        }
    }

    /// Weighted mean `Σ(rating·weighting) / Σweighting` over all raters.
    ///
    /// With no raters the result is `min_rating`, keeping it inside the bounds.
    pub fn calculate_rating(&self) -> Result<f64, RatingError> {
        if self.raters.is_empty() {
            debug!(
                rating = self.configuration.min_rating,
                "no raters declared, using minimum rating"
            );
            return Ok(self.configuration.min_rating);
        }

        let mut sum_total = 0.0;
        let mut weights_total = 0.0;

        for rater in self.raters {
            let rater: &dyn Rater = rater.as_ref();
            let rating = self.validate_rating(rater)?;
            let weighting = self.validate_weighting(rater)?;
            trace!(rater = rater.name(), rating, weighting, "rater accepted");

            sum_total += rating * weighting;
            weights_total += weighting;
        }

        if weights_total == 0.0 {
            warn!(raters = self.raters.len(), "total weighting is zero");
            return Err(RatingError::ZeroTotalWeighting {
                raters: self.raters.len(),
            });
        }

        let rating = sum_total / weights_total;
        debug!(raters = self.raters.len(), rating, "calculated weighted rating");
        Ok(rating)
    }

    fn validate_rating(&self, rater: &dyn Rater) -> Result<f64, RatingError> {
        let rating = rater.rating();
        if self.configuration.accepts_rating(rating) {
            Ok(rating)
        } else {
            warn!(rater = rater.name(), rating, "rating out of bounds");
            Err(RatingError::InvalidRating {
                value: rating,
                rater: rater.name().to_string(),
            })
        }
    }

    fn validate_weighting(&self, rater: &dyn Rater) -> Result<f64, RatingError> {
        let weighting = rater.weighting();
        if self.configuration.accepts_weighting(weighting) {
            Ok(weighting)
        } else {
            warn!(rater = rater.name(), weighting, "weighting out of bounds");
            Err(RatingError::InvalidWeighting {
                value: weighting,
                rater: rater.name().to_string(),
            })
        }
    }
}
