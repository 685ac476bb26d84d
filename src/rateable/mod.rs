use std::fmt;

use once_cell::sync::OnceCell;

use crate::rater::{short_type_name, Rater, RaterKind};
use crate::rating::{Configuration, RatingCalculator, RatingError};

/// Builds one rater bound to a rateable value.
pub type RaterFactory<R> = fn(&R) -> Box<dyn Rater>;

/// A rateable value: something whose rating comes from its declared raters.
///
/// Each implementing type holds its [`RateableDescriptor`] in a static and
/// each value carries a [`RaterCache`]:
///
/// ```ignore
/// static FILM: Lazy<RateableDescriptor<Film>> =
///     Lazy::new(|| RateableDescriptor::new().rate_with(raters![GoreRater, SwearingRater]));
///
/// impl Rateable for Film {
///     fn descriptor() -> &'static RateableDescriptor<Self> {
///         &FILM
///     }
///
///     fn rater_cache(&self) -> &RaterCache {
///         &self.raters
///     }
/// }
/// ```
pub trait Rateable: Sized + 'static {
    fn descriptor() -> &'static RateableDescriptor<Self>;

    fn rater_cache(&self) -> &RaterCache;

    /// Bounds shared by every value of this type.
    fn configuration() -> &'static Configuration {
        Self::descriptor().configuration()
    }

    /// Name used by default rater descriptions. Defaults to the type name.
    fn rateable_name(&self) -> String {
        short_type_name::<Self>().to_string()
    }

    /// Declared raters bound to `self`, built on first access and reused after.
    ///
    /// Factories must not call back into `raters` on the value being bound.
    fn raters(&self) -> &[Box<dyn Rater>] {
        self.rater_cache()
            .get_or_init(|| Self::descriptor().build_raters(self))
    }

    /// Weighted rating from all declared raters.
    fn rating(&self) -> Result<f64, RatingError> {
        RatingCalculator::rate(Self::configuration(), self.raters())
    }

    /// One description per rater, in declaration order.
    fn rating_descriptions(&self) -> Vec<String> {
        self.raters()
            .iter()
            .map(|rater| rater.description())
            .collect()
    }
}

/// A declared rater type for rateable type `R`.
pub struct RaterEntry<R> {
    name: &'static str,
    factory: RaterFactory<R>,
}

impl<R: Rateable> RaterEntry<R> {
    pub fn of<K: RaterKind<Rateable = R>>() -> Self {
        Self {
            name: K::kind_name(),
            factory: build_boxed::<K>,
        }
    }

    /// Register a hand-written factory under `name`.
    pub fn from_factory(name: &'static str, factory: RaterFactory<R>) -> Self {
        Self { name, factory }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn build(&self, rateable: &R) -> Box<dyn Rater> {
        (self.factory)(rateable)
    }
}

impl<R> Clone for RaterEntry<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RaterEntry<R> {}

impl<R> fmt::Debug for RaterEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RaterEntry").field(&self.name).finish()
    }
}

fn build_boxed<K: RaterKind>(rateable: &K::Rateable) -> Box<dyn Rater> {
    Box::new(K::build(rateable))
}

/// Type-level rating declaration: which raters apply, under which bounds.
pub struct RateableDescriptor<R> {
    raters: Vec<RaterEntry<R>>,
    configuration: OnceCell<Configuration>,
}

impl<R: Rateable> Default for RateableDescriptor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rateable> RateableDescriptor<R> {
    /// No raters, default configuration.
    pub fn new() -> Self {
        Self {
            raters: Vec::new(),
            configuration: OnceCell::new(),
        }
    }

    /// Declare the raters for the type. Replaces any earlier declaration.
    pub fn rate_with(mut self, raters: impl IntoIterator<Item = RaterEntry<R>>) -> Self {
        self.raters = raters.into_iter().collect();
        self
    }

    /// Use explicit bounds instead of [`Configuration::default`].
    pub fn with_configuration(self, configuration: Configuration) -> Self {
        Self {
            raters: self.raters,
            configuration: OnceCell::with_value(configuration),
        }
    }

    /// Created on first access, then fixed for the descriptor's lifetime.
    pub fn configuration(&self) -> &Configuration {
        self.configuration.get_or_init(Configuration::default)
    }

    pub fn raters(&self) -> &[RaterEntry<R>] {
        &self.raters
    }

    pub fn rater_names(&self) -> Vec<&'static str> {
        self.raters.iter().map(RaterEntry::name).collect()
    }

    pub fn build_raters(&self, rateable: &R) -> Vec<Box<dyn Rater>> {
        self.raters.iter().map(|entry| entry.build(rateable)).collect()
    }
}

impl<R> fmt::Debug for RateableDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateableDescriptor")
            .field("raters", &self.raters)
            .field("configuration", &self.configuration.get())
            .finish()
    }
}

/// Per-value memo of bound raters. Filled at most once.
///
/// Cloning yields an empty cache so the clone binds its own raters.
#[derive(Default)]
pub struct RaterCache {
    raters: OnceCell<Vec<Box<dyn Rater>>>,
}

impl RaterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_init<F>(&self, init: F) -> &[Box<dyn Rater>]
    where
        F: FnOnce() -> Vec<Box<dyn Rater>>,
    {
        self.raters.get_or_init(init)
    }

    pub fn is_initialized(&self) -> bool {
        self.raters.get().is_some()
    }
}

impl Clone for RaterCache {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for RaterCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raters.get() {
            Some(raters) => write!(f, "RaterCache({} raters)", raters.len()),
            None => write!(f, "RaterCache(uninitialized)"),
        }
    }
}

/// List of [`RaterEntry`] values for the given rater types, in order.
///
/// ```ignore
/// RateableDescriptor::new().rate_with(raters![GoreRater, SwearingRater])
/// ```
#[macro_export]
macro_rules! raters {
    ($($kind:ty),* $(,)?) => {
        vec![$($crate::rateable::RaterEntry::of::<$kind>()),*]
    };
}
