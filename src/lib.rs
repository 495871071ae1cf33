//! Sponsor Match - matching engine for the sponsorship CRM
//!
//! This library pairs sponsors with content creators. Each pair is scored on
//! audience fit, track record, category affinity, budget and trust, and the
//! results come back ranked with explanations.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Matcher, calculate_match_score};
pub use models::{
    CreatorProfile, MatchReason, MatchResult, ScoringWeights, SponsorGoal, SponsorProfile,
};
