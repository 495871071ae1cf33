// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AudienceBreakdown, BudgetRange, Confidence, CreatorProfile, CreatorType, GenderSplit,
    GoalType, MatchReason, MatchResult, MatchStatus, ReasonType, RooHistoryEntry,
    ScoringWeights, SponsorGoal, SponsorProfile, TargetGender,
};
pub use requests::{CreatorMatchRequest, SponsorMatchRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse};
