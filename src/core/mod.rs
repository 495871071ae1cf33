// Core algorithm exports
pub mod audience;
pub mod budget;
pub mod category;
pub mod matcher;
pub mod performance;
pub mod scoring;

pub use audience::calculate_audience_match;
pub use budget::calculate_budget_match;
pub use category::{calculate_category_match, loosely_matches};
pub use matcher::{
    Matcher, DEFAULT_EXPIRY_DAYS, DEFAULT_LIMIT, DEFAULT_MIN_SCORE, MAX_EXPIRY_DAYS,
};
pub use performance::calculate_performance_match;
pub use scoring::{calculate_match_score, determine_confidence, PairScore};
