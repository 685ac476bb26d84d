use serde::{Deserialize, Serialize};

use crate::rateable::RaterCache;
use crate::rater::{BaseRater, Rater};
use crate::rating::{Configuration, RatingCalculator, RatingError, DEFAULT_WEIGHTING};

/// Scorecard file contents.
///
/// Example YAML:
/// ```yaml
/// name: Alien
/// configuration:
///   max_rating: 10
/// raters:
///   - name: GoreRater
///     rating: 8
///     weighting: 0.4
///   - name: SwearingRater
///     rating: 3
///     description: "Mild language throughout"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScorecardDefinition {
    /// Display name of the rated item
    pub name: String,

    /// Bounds for this scorecard; falls back to the loaded configuration
    #[serde(default)]
    pub configuration: Option<Configuration>,

    /// Raters in declaration order
    #[serde(default)]
    pub raters: Vec<RaterDefinition>,
}

/// One fixed rater opinion within a scorecard.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RaterDefinition {
    /// Rater name shown in errors and descriptions
    pub name: String,

    /// Rating given (default: the configuration's min_rating)
    #[serde(default)]
    pub rating: Option<f64>,

    /// Weighting of this rater (default: 1.0)
    #[serde(default)]
    pub weighting: Option<f64>,

    /// Replaces the generated description when set
    #[serde(default)]
    pub description: Option<String>,
}

struct ScorecardRater {
    base: BaseRater,
    rating: Option<f64>,
    description: Option<String>,
}

impl ScorecardRater {
    fn bind(definition: &RaterDefinition, scorecard: &str, configuration: Configuration) -> Self {
        Self {
            base: BaseRater::new(
                definition.name.clone(),
                scorecard,
                configuration,
                definition.weighting.unwrap_or(DEFAULT_WEIGHTING),
            ),
            rating: definition.rating,
            description: definition.description.clone(),
        }
    }
}

impl Rater for ScorecardRater {
    fn base(&self) -> &BaseRater {
        &self.base
    }

    fn rating(&self) -> f64 {
        self.rating.unwrap_or_else(|| self.base.min_rating())
    }

    fn description(&self) -> String {
        match &self.description {
            Some(text) => text.clone(),
            None => self.base.describe(self.rating(), self.weighting()),
        }
    }
}

/// A rateable item whose raters come from data rather than code.
#[derive(Debug, Clone)]
pub struct Scorecard {
    definition: ScorecardDefinition,
    configuration: Configuration,
    raters: RaterCache,
}

impl Scorecard {
    /// `fallback` applies when the definition carries no configuration of its own.
    pub fn new(definition: ScorecardDefinition, fallback: Configuration) -> Self {
        let configuration = definition.configuration.unwrap_or(fallback);
        Self {
            definition,
            configuration,
            raters: RaterCache::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn definition(&self) -> &ScorecardDefinition {
        &self.definition
    }

    pub fn raters(&self) -> &[Box<dyn Rater>] {
        self.raters.get_or_init(|| {
            self.definition
                .raters
                .iter()
                .map(|definition| {
                    Box::new(ScorecardRater::bind(
                        definition,
                        &self.definition.name,
                        self.configuration,
                    )) as Box<dyn Rater>
                })
                .collect()
        })
    }

    pub fn rating(&self) -> Result<f64, RatingError> {
        RatingCalculator::rate(&self.configuration, self.raters())
    }

    pub fn rating_descriptions(&self) -> Vec<String> {
        self.raters()
            .iter()
            .map(|rater| rater.description())
            .collect()
    }
}
