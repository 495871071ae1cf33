use crate::models::{CreatorProfile, MatchReason, ReasonType, SponsorProfile};

/// Score used when no performance criterion applies
pub const NEUTRAL_PERFORMANCE_SCORE: f64 = 50.0;

const ROI_FLOOR: f64 = 15.0;
const ROO_FLOOR: f64 = 70.0;
const STRONG_HISTORY_SCORE: f64 = 80.0;
const HIGH_ENGAGEMENT_RATE: f64 = 5.0;

/// Calculate how well a creator's track record meets the sponsor's floors (0-100)
///
/// Each active criterion adds to a running score and to a factor count; the
/// result is `score / factor`, i.e. a mean over the criteria that applied.
/// Criteria that do not apply are skipped rather than penalised.
pub fn calculate_performance_match(
    sponsor: &SponsorProfile,
    creator: &CreatorProfile,
    dimension_weight: f64,
) -> (f64, Vec<MatchReason>) {
    let mut score = 0.0;
    let mut factor = 0.0;
    let mut reasons = Vec::new();

    // ROI floor
    if let Some(min_roi) = average(sponsor.goals.iter().filter_map(|g| g.min_roi)) {
        if creator.avg_roi >= min_roi {
            let roi_score = (creator.avg_roi / min_roi.max(ROI_FLOOR) * 80.0).min(100.0);
            score += roi_score;
            factor += 1.0;
            reasons.push(MatchReason::new(
                ReasonType::Performance,
                format!(
                    "Average ROI of {:.1}% meets the {:.1}% target",
                    creator.avg_roi, min_roi
                ),
                roi_score * dimension_weight,
                creator.avg_roi >= min_roi * 1.2,
            ));
        }
    }

    // ROO floor
    if let Some(min_roo) = average(sponsor.goals.iter().filter_map(|g| g.min_roo)) {
        if creator.avg_roo >= min_roo {
            let roo_score = (creator.avg_roo / min_roo.max(ROO_FLOOR) * 85.0).min(100.0);
            score += roo_score;
            factor += 1.0;
            if creator.avg_roo >= 80.0 {
                reasons.push(MatchReason::new(
                    ReasonType::Performance,
                    format!("Strong return on objectives ({:.0}/100)", creator.avg_roo),
                    roo_score * dimension_weight,
                    creator.avg_roo >= 85.0,
                ));
            }
        }
    }

    // Category history
    for category in sponsor.goals.iter().flat_map(|g| g.target_categories.iter()) {
        let Some(entry) = creator.roo_history_for(category) else {
            continue;
        };
        if entry.avg_score >= STRONG_HISTORY_SCORE {
            score += entry.avg_score * 0.5;
            factor += 0.5;
            reasons.push(MatchReason::new(
                ReasonType::History,
                format!(
                    "{} campaigns in {} averaged {:.0} ROO",
                    entry.campaign_count, entry.category, entry.avg_score
                ),
                entry.avg_score * 0.5 * dimension_weight,
                entry.avg_score >= 85.0 && entry.campaign_count >= 3,
            ));
        }
    }

    // Engagement
    if creator.engagement_rate >= HIGH_ENGAGEMENT_RATE {
        let engagement_score = (creator.engagement_rate * 10.0).min(100.0);
        score += engagement_score * 0.3;
        factor += 0.3;
        reasons.push(MatchReason::new(
            ReasonType::Performance,
            format!("High engagement rate ({:.1}%)", creator.engagement_rate),
            engagement_score * 0.3 * dimension_weight,
            false,
        ));
    }

    let result = if factor > 0.0 {
        score / factor
    } else {
        NEUTRAL_PERFORMANCE_SCORE
    };

    (result.clamp(0.0, 100.0), reasons)
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
