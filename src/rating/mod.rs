pub mod calculator;
pub mod config;
pub mod error;
pub mod validation;

pub use calculator::RatingCalculator;
pub use config::{Configuration, DEFAULT_WEIGHTING};
pub use error::RatingError;
pub use validation::validate_configuration;
