//! Weighted ratings from pluggable raters.
//!
//! A [`Rateable`] type declares its raters once in a [`RateableDescriptor`];
//! each rater contributes a rating and a weighting, and
//! [`RatingCalculator`] combines them into a weighted mean after checking
//! every value against the type's [`Configuration`].

pub mod config;
pub mod output;
pub mod rateable;
pub mod rater;
pub mod rating;
pub mod scorecard;

pub use rateable::{Rateable, RateableDescriptor, RaterCache, RaterEntry, RaterFactory};
pub use rater::{BaseRater, Rater, RaterKind};
pub use rating::{Configuration, RatingCalculator, RatingError, DEFAULT_WEIGHTING};
