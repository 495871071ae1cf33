use crate::models::{Confidence, CreatorProfile, MatchReason, ScoringWeights, SponsorProfile};
use crate::core::{
    audience::calculate_audience_match,
    budget::calculate_budget_match,
    category::calculate_category_match,
    performance::calculate_performance_match,
};

/// Scored dimensions of one sponsor/creator pair, before any timestamps are attached
#[derive(Debug, Clone, PartialEq)]
pub struct PairScore {
    pub match_score: u8,
    pub audience_match: f64,
    pub performance_match: f64,
    pub category_match: f64,
    pub budget_match: f64,
    pub trust_factor: f64,
    pub reasons: Vec<MatchReason>,
    pub potential_roi: f64,
    pub potential_roo: f64,
    pub confidence: Confidence,
}

/// Calculate the composite match score (0-100) for a sponsor/creator pair
///
/// Scoring formula:
/// score = round(
///     audience * 0.30 +       # goal demographics vs creator audience
///     performance * 0.25 +    # ROI/ROO floors, category history, engagement
///     category * 0.20 +       # preferred categories, past campaigns, tags
///     budget * 0.15 +         # sponsor budget vs creator pricing
///     trust * 0.10            # creator trust score
/// )
///
/// The scorer always takes `(sponsor, creator)` positionally, whichever side
/// initiated the search.
pub fn calculate_match_score(
    sponsor: &SponsorProfile,
    creator: &CreatorProfile,
    weights: &ScoringWeights,
) -> PairScore {
    let (audience_match, mut reasons) =
        calculate_audience_match(sponsor, creator, weights.audience);
    let (performance_match, performance_reasons) =
        calculate_performance_match(sponsor, creator, weights.performance);
    let (category_match, category_reasons) =
        calculate_category_match(sponsor, creator, weights.category);
    let (budget_match, budget_reasons) =
        calculate_budget_match(&sponsor.budget_range, &creator.pricing, weights.budget);
    let trust_factor = creator.trust_score.clamp(0.0, 100.0);

    let total = audience_match * weights.audience
        + performance_match * weights.performance
        + category_match * weights.category
        + budget_match * weights.budget
        + trust_factor * weights.trust;
    let match_score = total.round().clamp(0.0, 100.0) as u8;

    reasons.extend(performance_reasons);
    reasons.extend(category_reasons);
    reasons.extend(budget_reasons);
    reasons.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    PairScore {
        match_score,
        audience_match,
        performance_match,
        category_match,
        budget_match,
        trust_factor,
        reasons,
        potential_roi: estimate_potential_roi(sponsor, creator),
        potential_roo: estimate_potential_roo(sponsor, creator),
        confidence: determine_confidence(match_score, creator),
    }
}

/// Advisory ROI estimate, rounded to one decimal
pub fn estimate_potential_roi(sponsor: &SponsorProfile, creator: &CreatorProfile) -> f64 {
    let mut roi = creator.avg_roi;
    if sponsor.prefers(&creator.category) {
        roi *= 1.1;
    }
    if creator.trust_score >= 90.0 {
        roi *= 1.05;
    }
    (roi * 10.0).round() / 10.0
}

/// Advisory ROO estimate: blends the creator average with the first history
/// entry in a preferred category
pub fn estimate_potential_roo(sponsor: &SponsorProfile, creator: &CreatorProfile) -> f64 {
    let history = sponsor
        .preferred_categories
        .iter()
        .find_map(|category| creator.roo_history_for(category));

    match history {
        Some(entry) => ((creator.avg_roo + entry.avg_score) / 2.0).round(),
        None => creator.avg_roo.round(),
    }
}

pub fn determine_confidence(match_score: u8, creator: &CreatorProfile) -> Confidence {
    if match_score >= 80 && creator.completed_campaigns >= 10 && creator.verified {
        Confidence::High
    } else if match_score >= 60 && creator.completed_campaigns >= 5 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
