pub mod storage;
pub mod types;

pub use storage::load_scorecard;
pub use types::{RaterDefinition, Scorecard, ScorecardDefinition};
