use crate::models::{CreatorProfile, MatchReason, ReasonType, SponsorProfile, TargetGender};

/// Score used when no goal carries an audience constraint
pub const NEUTRAL_AUDIENCE_SCORE: f64 = 50.0;

/// Calculate how well a creator's audience fits the sponsor goals (0-100)
///
/// Every goal contributes with weight `priority / 10`:
/// - age group: `min(100, pct * 2.5)` at full goal weight
/// - gender: `min(100, pct * 1.5)` at half goal weight
/// - locations: share of requested locations covered, at half goal weight
///
/// The result is the weighted average of all contributions, or 50 when no
/// goal constrains the audience. `dimension_weight` scales reason scores.
pub fn calculate_audience_match(
    sponsor: &SponsorProfile,
    creator: &CreatorProfile,
    dimension_weight: f64,
) -> (f64, Vec<MatchReason>) {
    let audience = &creator.audience;
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut reasons = Vec::new();

    for goal in &sponsor.goals {
        let goal_weight = goal.weight();

        if let Some(age_group) = goal.target_age_group.as_deref() {
            if let Some(&pct) = audience.age_groups.get(age_group) {
                let score = (pct * 2.5).min(100.0);
                weighted_sum += score * goal_weight;
                total_weight += goal_weight;

                if pct >= 30.0 {
                    reasons.push(MatchReason::new(
                        ReasonType::Audience,
                        format!("{:.0}% of the audience is in the {} age group", pct, age_group),
                        score * dimension_weight,
                        pct >= 40.0,
                    ));
                }
            }
        }

        match goal.target_gender {
            Some(gender @ (TargetGender::Male | TargetGender::Female)) => {
                let pct = audience.gender.percentage(gender).unwrap_or(0.0);
                let score = (pct * 1.5).min(100.0);
                weighted_sum += score * goal_weight * 0.5;
                total_weight += goal_weight * 0.5;

                if pct >= 50.0 {
                    let label = match gender {
                        TargetGender::Male => "male",
                        _ => "female",
                    };
                    reasons.push(MatchReason::new(
                        ReasonType::Audience,
                        format!("{:.0}% {} audience", pct, label),
                        score * dimension_weight * 0.5,
                        false,
                    ));
                }
            }
            Some(TargetGender::All) | None => {}
        }

        if !goal.target_locations.is_empty() {
            let matching: Vec<&str> = goal
                .target_locations
                .iter()
                .filter(|loc| audience.top_locations.contains(loc))
                .map(String::as_str)
                .collect();

            let score = matching.len() as f64 / goal.target_locations.len() as f64 * 100.0;
            weighted_sum += score * goal_weight * 0.5;
            total_weight += goal_weight * 0.5;

            if !matching.is_empty() {
                reasons.push(MatchReason::new(
                    ReasonType::Audience,
                    format!("Audience is concentrated in {}", matching.join(", ")),
                    score * dimension_weight * 0.5,
                    false,
                ));
            }
        }
    }

    let score = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        NEUTRAL_AUDIENCE_SCORE
    };

    (score.clamp(0.0, 100.0), reasons)
}
