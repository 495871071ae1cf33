use chrono::{DateTime, Duration, Utc};
use crate::models::{CreatorProfile, MatchResult, MatchStatus, ScoringWeights, SponsorProfile};
use crate::core::scoring::{calculate_match_score, PairScore};

/// Results below this score are dropped
pub const DEFAULT_MIN_SCORE: u8 = 50;
/// Number of results returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 10;
/// Days until a match result expires
pub const DEFAULT_EXPIRY_DAYS: i64 = 7;
/// Longest accepted expiry window
pub const MAX_EXPIRY_DAYS: i64 = 3650;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Pairwise scoring of every candidate
/// 2. Threshold filtering
/// 3. Ranking by match score
/// 4. Truncation to the requested limit
///
/// The matcher holds only immutable configuration and can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: u8,
    expiry: Duration,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            min_score: DEFAULT_MIN_SCORE,
            expiry: Duration::days(DEFAULT_EXPIRY_DAYS),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score;
        self
    }

    /// Set the expiry window, clamped to `1..=MAX_EXPIRY_DAYS`
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.expiry = Duration::days(days.clamp(1, MAX_EXPIRY_DAYS));
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Rank creators for a sponsor
    ///
    /// # Arguments
    /// * `sponsor` - The sponsor looking for creators
    /// * `creators` - Candidate creators
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// Matches scoring at least the minimum score, best first
    pub fn find_matches_for_sponsor(
        &self,
        sponsor: &SponsorProfile,
        creators: &[CreatorProfile],
        limit: usize,
    ) -> Vec<MatchResult> {
        let now = Utc::now();
        let matches = creators
            .iter()
            .map(|creator| self.build_result(sponsor, creator, now))
            .collect();

        let ranked = self.rank(matches, limit);
        tracing::debug!(
            "Sponsor {} matched {} of {} creators",
            sponsor.id,
            ranked.len(),
            creators.len()
        );
        ranked
    }

    /// Rank sponsors for a creator, using the same pairwise scorer
    pub fn find_matches_for_creator(
        &self,
        creator: &CreatorProfile,
        sponsors: &[SponsorProfile],
        limit: usize,
    ) -> Vec<MatchResult> {
        let now = Utc::now();
        let matches = sponsors
            .iter()
            .map(|sponsor| self.build_result(sponsor, creator, now))
            .collect();

        let ranked = self.rank(matches, limit);
        tracing::debug!(
            "Creator {} matched {} of {} sponsors",
            creator.id,
            ranked.len(),
            sponsors.len()
        );
        ranked
    }

    /// Score a single pair without applying the threshold
    pub fn score_pair(&self, sponsor: &SponsorProfile, creator: &CreatorProfile) -> MatchResult {
        self.build_result(sponsor, creator, Utc::now())
    }

    fn build_result(
        &self,
        sponsor: &SponsorProfile,
        creator: &CreatorProfile,
        now: DateTime<Utc>,
    ) -> MatchResult {
        let PairScore {
            match_score,
            audience_match,
            performance_match,
            category_match,
            budget_match,
            reasons,
            potential_roi,
            potential_roo,
            confidence,
            ..
        } = calculate_match_score(sponsor, creator, &self.weights);

        MatchResult {
            id: uuid::Uuid::new_v4(),
            sponsor_id: sponsor.id.clone(),
            creator_id: creator.id.clone(),
            match_score,
            audience_match: as_percent(audience_match),
            performance_match: as_percent(performance_match),
            budget_match: as_percent(budget_match),
            category_match: as_percent(category_match),
            match_reasons: reasons,
            potential_roi,
            potential_roo,
            confidence,
            created_at: now,
            expires_at: now + self.expiry,
            status: MatchStatus::New,
        }
    }

    fn rank(&self, mut matches: Vec<MatchResult>, limit: usize) -> Vec<MatchResult> {
        matches.retain(|m| m.match_score >= self.min_score);
        // Stable sort keeps candidate order between equal scores
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(limit);
        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[inline]
fn as_percent(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{creator, sponsor};
    use crate::models::BudgetRange;

    fn strong_creator(id: &str, trust: f64) -> CreatorProfile {
        let mut c = creator();
        c.id = id.to_string();
        c.category = "Teknoloji".to_string();
        c.trust_score = trust;
        c
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = Matcher::with_default_weights();
        let s = sponsor();

        let mut weak = creator();
        weak.id = "weak".to_string();
        weak.pricing = BudgetRange::new(500_000.0, 900_000.0);

        let candidates = vec![strong_creator("strong", 80.0), weak];
        let result = matcher.find_matches_for_sponsor(&s, &candidates, 10);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].creator_id, "strong");
        assert_eq!(result[0].sponsor_id, s.id);
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let matcher = Matcher::with_default_weights();
        let candidates = vec![
            strong_creator("1", 60.0),
            strong_creator("2", 100.0),
            strong_creator("3", 80.0),
        ];

        let result = matcher.find_matches_for_sponsor(&sponsor(), &candidates, 10);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].creator_id, "2");
        for pair in result.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let candidates: Vec<CreatorProfile> = (0..20)
            .map(|i| strong_creator(&i.to_string(), 60.0 + i as f64))
            .collect();

        let result = matcher.find_matches_for_sponsor(&sponsor(), &candidates, 5);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_empty_candidates() {
        let matcher = Matcher::default();
        assert!(matcher.find_matches_for_sponsor(&sponsor(), &[], 10).is_empty());
        assert!(matcher.find_matches_for_creator(&creator(), &[], 10).is_empty());
    }

    #[test]
    fn test_min_score_override() {
        let matcher = Matcher::with_default_weights().with_min_score(0);
        let result = matcher.find_matches_for_sponsor(&sponsor(), &[creator()], 10);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_expiry_and_status() {
        let matcher = Matcher::with_default_weights();
        let result = matcher.score_pair(&sponsor(), &creator());

        assert_eq!(result.status, MatchStatus::New);
        assert_eq!(result.expires_at - result.created_at, Duration::days(7));
        assert!(!result.is_expired(result.created_at));
        assert!(result.is_expired(result.created_at + Duration::days(8)));
    }

    #[test]
    fn test_expiry_days_are_clamped() {
        let matcher = Matcher::with_default_weights().with_expiry_days(i64::MAX);
        let result = matcher.score_pair(&sponsor(), &creator());
        assert_eq!(
            result.expires_at - result.created_at,
            Duration::days(MAX_EXPIRY_DAYS)
        );

        let matcher = Matcher::with_default_weights().with_expiry_days(-30);
        let result = matcher.score_pair(&sponsor(), &creator());
        assert!(!result.is_expired(result.created_at));
        assert_eq!(result.expires_at - result.created_at, Duration::days(1));
    }
}
