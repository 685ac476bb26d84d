use std::borrow::Cow;

use crate::rateable::Rateable;
use crate::rating::{Configuration, DEFAULT_WEIGHTING};

/// A single scored opinion about a rateable value.
///
/// Implementors embed a [`BaseRater`] and hand it out through [`Rater::base`];
/// every other method has a default built on it. Most raters only override
/// [`Rater::rating`], and sometimes [`Rater::description`].
///
/// `rating` can be called more than once per calculation (once to aggregate,
/// once for the description), so expensive ratings should be cached inside
/// the rater.
pub trait Rater: Send + Sync {
    fn base(&self) -> &BaseRater;

    /// Type name reported in errors and default descriptions.
    fn name(&self) -> &str {
        self.base().rater_name()
    }

    /// Defaults to the configuration's minimum rating.
    fn rating(&self) -> f64 {
        self.base().min_rating()
    }

    /// Defaults to the weight declared by the rater type.
    fn weighting(&self) -> f64 {
        self.base().weighting()
    }

    /// e.g. "GoreRater rated Alien at 8 with weighting of 0.4"
    fn description(&self) -> String {
        self.base().describe(self.rating(), self.weighting())
    }
}

/// Type-level side of a rater: its fixed weight and how to bind it.
///
/// ```ignore
/// struct GoreRater {
///     base: BaseRater,
///     gore: u8,
/// }
///
/// impl RaterKind for GoreRater {
///     type Rateable = Film;
///     const WEIGHT: f64 = 0.4;
///
///     fn build(film: &Film) -> Self {
///         Self { base: BaseRater::bind::<Self>(film), gore: film.gore }
///     }
/// }
/// ```
pub trait RaterKind: Rater + Sized + 'static {
    type Rateable: Rateable;

    /// Weighting shared by every instance of this rater type.
    const WEIGHT: f64 = DEFAULT_WEIGHTING;

    fn build(rateable: &Self::Rateable) -> Self;

    fn kind_name() -> &'static str {
        short_type_name::<Self>()
    }
}

/// State every rater carries: who it is, what it rates, and under which bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseRater {
    rater_name: Cow<'static, str>,
    rateable_name: String,
    configuration: Configuration,
    weighting: f64,
}

impl BaseRater {
    pub fn new(
        rater_name: impl Into<Cow<'static, str>>,
        rateable_name: impl Into<String>,
        configuration: Configuration,
        weighting: f64,
    ) -> Self {
        Self {
            rater_name: rater_name.into(),
            rateable_name: rateable_name.into(),
            configuration,
            weighting,
        }
    }

    /// Bind the base state for rater type `K` to `rateable`.
    pub fn bind<K: RaterKind>(rateable: &K::Rateable) -> Self {
        Self::new(
            K::kind_name(),
            rateable.rateable_name(),
            *<K::Rateable as Rateable>::configuration(),
            K::WEIGHT,
        )
    }

    /// A rater that rates nothing: minimum rating at the default weighting.
    pub fn build<R: Rateable>(rateable: &R) -> Self {
        Self::new(
            "BaseRater",
            rateable.rateable_name(),
            *R::configuration(),
            DEFAULT_WEIGHTING,
        )
    }

    pub fn rater_name(&self) -> &str {
        &self.rater_name
    }

    pub fn rateable_name(&self) -> &str {
        &self.rateable_name
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn min_rating(&self) -> f64 {
        self.configuration.min_rating
    }

    pub fn max_rating(&self) -> f64 {
        self.configuration.max_rating
    }

    pub fn weighting(&self) -> f64 {
        self.weighting
    }

    pub fn describe(&self, rating: f64, weighting: f64) -> String {
        format!(
            "{} rated {} at {} with weighting of {}",
            self.rater_name, self.rateable_name, rating, weighting
        )
    }
}

impl Rater for BaseRater {
    fn base(&self) -> &BaseRater {
        self
    }
}

/// Last path segment of a type name, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
