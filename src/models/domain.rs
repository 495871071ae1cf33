use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Strategic objective behind a sponsor goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    AudienceReach,
    BrandAwareness,
    Engagement,
    Conversion,
    AppDownload,
    LeadGeneration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetGender {
    Male,
    Female,
    All,
}

/// Inclusive numeric range, used for sponsor budgets and creator pricing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One objective of a sponsor's campaign intent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SponsorGoal {
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    #[serde(rename = "targetAgeGroup", default)]
    pub target_age_group: Option<String>,
    #[serde(rename = "targetGender", default)]
    pub target_gender: Option<TargetGender>,
    #[serde(rename = "targetLocations", default)]
    pub target_locations: Vec<String>,
    #[serde(rename = "targetCategories", default)]
    pub target_categories: Vec<String>,
    #[serde(rename = "minROI", default)]
    pub min_roi: Option<f64>,
    #[serde(rename = "minROO", default)]
    pub min_roo: Option<f64>,
    #[serde(rename = "budgetRange", default)]
    pub budget_range: Option<BudgetRange>,
    #[validate(range(min = 1, max = 10))]
    pub priority: u8,
}

impl SponsorGoal {
    /// Weight of this goal within the sponsor's goal set
    #[inline]
    pub fn weight(&self) -> f64 {
        self.priority as f64 / 10.0
    }
}

/// Sponsor identity and matching preferences
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SponsorProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(rename = "trustScore", default)]
    pub trust_score: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(rename = "collaborationScore", default)]
    pub collaboration_score: f64,
    #[serde(rename = "preferredCategories", default)]
    pub preferred_categories: Vec<String>,
    #[serde(rename = "budgetRange")]
    pub budget_range: BudgetRange,
    #[validate(nested)]
    #[serde(default)]
    pub goals: Vec<SponsorGoal>,
}

impl SponsorProfile {
    /// Exact membership test against the preferred category list
    pub fn prefers(&self, category: &str) -> bool {
        self.preferred_categories.iter().any(|c| c == category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CreatorType {
    Youtuber,
    Club,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GenderSplit {
    #[serde(default)]
    pub male: f64,
    #[serde(default)]
    pub female: f64,
}

impl GenderSplit {
    /// Percentage for a targeted gender; `All` has no single bucket
    pub fn percentage(&self, gender: TargetGender) -> Option<f64> {
        match gender {
            TargetGender::Male => Some(self.male),
            TargetGender::Female => Some(self.female),
            TargetGender::All => None,
        }
    }
}

/// Audience demographics; each bucket is an independent percentage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudienceBreakdown {
    #[serde(rename = "ageGroups", default)]
    pub age_groups: HashMap<String, f64>,
    #[serde(default)]
    pub gender: GenderSplit,
    #[serde(rename = "topLocations", default)]
    pub top_locations: Vec<String>,
}

/// Aggregated return-on-objectives history for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RooHistoryEntry {
    pub category: String,
    #[serde(rename = "avgScore")]
    pub avg_score: f64,
    #[serde(rename = "campaignCount", default)]
    pub campaign_count: u32,
}

/// Creator or club channel with audience and track record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatorProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub creator_type: CreatorType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(rename = "avgViews", default)]
    pub avg_views: u64,
    #[validate(range(min = 0.0))]
    #[serde(rename = "engagementRate", default)]
    pub engagement_rate: f64,
    #[serde(rename = "avgROI", default)]
    pub avg_roi: f64,
    #[serde(rename = "avgROO", default)]
    pub avg_roo: f64,
    #[serde(rename = "completedCampaigns", default)]
    pub completed_campaigns: u32,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(rename = "trustScore", default)]
    pub trust_score: f64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub audience: AudienceBreakdown,
    pub pricing: BudgetRange,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "pastCampaignCategories", default)]
    pub past_campaign_categories: Vec<String>,
    #[serde(rename = "rooHistory", default)]
    pub roo_history: Vec<RooHistoryEntry>,
}

impl CreatorProfile {
    /// Look up a history entry by category, ignoring case
    pub fn roo_history_for(&self, category: &str) -> Option<&RooHistoryEntry> {
        let wanted = category.to_lowercase();
        self.roo_history
            .iter()
            .find(|entry| entry.category.to_lowercase() == wanted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReasonType {
    Audience,
    Performance,
    Budget,
    Category,
    History,
}

/// One explanatory contribution to a match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReason {
    #[serde(rename = "type")]
    pub reason_type: ReasonType,
    pub description: String,
    pub score: f64,
    pub highlight: bool,
}

impl MatchReason {
    pub fn new(
        reason_type: ReasonType,
        description: impl Into<String>,
        score: f64,
        highlight: bool,
    ) -> Self {
        Self {
            reason_type,
            description: description.into(),
            score,
            highlight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Workflow state of a match; transitions belong to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    #[default]
    New,
    Viewed,
    Contacted,
    Declined,
    Accepted,
}

/// Scored sponsor/creator pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: uuid::Uuid,
    #[serde(rename = "sponsorId")]
    pub sponsor_id: String,
    #[serde(rename = "creatorId")]
    pub creator_id: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "audienceMatch")]
    pub audience_match: u8,
    #[serde(rename = "performanceMatch")]
    pub performance_match: u8,
    #[serde(rename = "budgetMatch")]
    pub budget_match: u8,
    #[serde(rename = "categoryMatch")]
    pub category_match: u8,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<MatchReason>,
    #[serde(rename = "potentialROI")]
    pub potential_roi: f64,
    #[serde(rename = "potentialROO")]
    pub potential_roo: f64,
    pub confidence: Confidence,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
    pub status: MatchStatus,
}

impl MatchResult {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub audience: f64,
    pub performance: f64,
    pub category: f64,
    pub budget: f64,
    pub trust: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.audience + self.performance + self.category + self.budget + self.trust
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            audience: 0.30,
            performance: 0.25,
            category: 0.20,
            budget: 0.15,
            trust: 0.10,
        }
    }
}
