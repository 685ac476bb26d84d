use five_star::{
    raters, BaseRater, Configuration, Rateable, RateableDescriptor, Rater, RaterCache, RaterKind,
    RatingError,
};
use once_cell::sync::{Lazy, OnceCell};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Blood {
    None,
    ALittle,
    ALot,
}

struct Film {
    title: String,
    blood_spilt: Blood,
    swear_words: u32,
    raters: RaterCache,
}

impl Film {
    fn new(title: &str, blood_spilt: Blood, swear_words: u32) -> Self {
        Self {
            title: title.to_string(),
            blood_spilt,
            swear_words,
            raters: RaterCache::new(),
        }
    }
}

static FILM: Lazy<RateableDescriptor<Film>> =
    Lazy::new(|| RateableDescriptor::new().rate_with(raters![GoreRater, SwearingRater]));

impl Rateable for Film {
    fn descriptor() -> &'static RateableDescriptor<Self> {
        &FILM
    }

    fn rater_cache(&self) -> &RaterCache {
        &self.raters
    }

    fn rateable_name(&self) -> String {
        self.title.clone()
    }
}

struct GoreRater {
    base: BaseRater,
    blood_spilt: Blood,
}

impl Rater for GoreRater {
    fn base(&self) -> &BaseRater {
        &self.base
    }

    fn rating(&self) -> f64 {
        match self.blood_spilt {
            Blood::ALot => self.base.max_rating(),
            Blood::ALittle => 5.0,
            Blood::None => self.base.min_rating(),
        }
    }

    fn description(&self) -> String {
        format!(
            "The film {} was rated {} for gore",
            self.base.rateable_name(),
            self.rating()
        )
    }
}

impl RaterKind for GoreRater {
    type Rateable = Film;
    const WEIGHT: f64 = 0.4;

    fn build(film: &Film) -> Self {
        Self {
            base: BaseRater::bind::<Self>(film),
            blood_spilt: film.blood_spilt,
        }
    }
}

/// Caches its rating, which is treated as expensive to compute.
struct SwearingRater {
    base: BaseRater,
    swear_words: u32,
    rating: OnceCell<f64>,
}

impl Rater for SwearingRater {
    fn base(&self) -> &BaseRater {
        &self.base
    }

    fn rating(&self) -> f64 {
        *self
            .rating
            .get_or_init(|| (self.swear_words as f64 / 10.0).min(self.base.max_rating()))
    }
}

impl RaterKind for SwearingRater {
    type Rateable = Film;

    fn build(film: &Film) -> Self {
        Self {
            base: BaseRater::bind::<Self>(film),
            swear_words: film.swear_words,
            rating: OnceCell::new(),
        }
    }
}

#[test]
fn test_film_weighted_rating() {
    // (10 * 0.4 + 3 * 1.0) / 1.4
    let film = Film::new("Alien", Blood::ALot, 30);
    let rating = film.rating().unwrap();
    assert!((rating - 5.0).abs() < 0.0001);
}

#[test]
fn test_film_descriptions_follow_declaration_order() {
    let film = Film::new("Alien", Blood::ALittle, 20);
    assert_eq!(
        film.rating_descriptions(),
        vec![
            "The film Alien was rated 5 for gore".to_string(),
            "SwearingRater rated Alien at 2 with weighting of 1".to_string(),
        ]
    );
}

#[test]
fn test_clean_film_rates_at_floor() {
    let film = Film::new("Paddington", Blood::None, 0);
    assert_eq!(film.rating(), Ok(0.0));
}

#[test]
fn test_declared_raters() {
    assert_eq!(
        Film::descriptor().rater_names(),
        vec!["GoreRater", "SwearingRater"]
    );
    assert_eq!(Film::configuration(), &Configuration::default());
}

#[test]
fn test_raters_reused_across_calls() {
    let film = Film::new("Heat", Blood::ALittle, 45);
    film.rating().unwrap();
    let first = film.raters().as_ptr();
    film.rating_descriptions();
    film.rating().unwrap();

    assert_eq!(first, film.raters().as_ptr());
    let swearing = &film.raters()[1];
    assert_eq!(swearing.name(), "SwearingRater");
    assert_eq!(swearing.rating(), 4.5);
}

struct Album {
    raters: RaterCache,
}

static ALBUM: Lazy<RateableDescriptor<Album>> = Lazy::new(|| {
    RateableDescriptor::new()
        .rate_with(raters![LoudnessRater])
        .with_configuration(Configuration::new(1.0, 5.0, 0.0, 1.0))
});

impl Rateable for Album {
    fn descriptor() -> &'static RateableDescriptor<Self> {
        &ALBUM
    }

    fn rater_cache(&self) -> &RaterCache {
        &self.raters
    }
}

struct LoudnessRater {
    base: BaseRater,
}

impl Rater for LoudnessRater {
    fn base(&self) -> &BaseRater {
        &self.base
    }

    fn rating(&self) -> f64 {
        11.0
    }
}

impl RaterKind for LoudnessRater {
    type Rateable = Album;

    fn build(album: &Album) -> Self {
        Self {
            base: BaseRater::bind::<Self>(album),
        }
    }
}

#[test]
fn test_out_of_bounds_rater_fails_with_its_name() {
    let album = Album {
        raters: RaterCache::new(),
    };
    let err = album.rating().unwrap_err();
    assert_eq!(
        err,
        RatingError::InvalidRating {
            value: 11.0,
            rater: "LoudnessRater".to_string()
        }
    );
    assert_eq!(err.to_string(), "Rating 11 is invalid from LoudnessRater");
}

#[test]
fn test_descriptions_still_available_when_rating_fails() {
    let album = Album {
        raters: RaterCache::new(),
    };
    assert_eq!(
        album.rating_descriptions(),
        vec!["LoudnessRater rated Album at 11 with weighting of 1".to_string()]
    );
}
