use crate::models::{CreatorProfile, MatchReason, ReasonType, SponsorProfile};

/// Score when nothing links the creator to the sponsor's categories
pub const CATEGORY_FLOOR_SCORE: f64 = 30.0;

/// Calculate category affinity (0-100)
///
/// Unlike the other dimensions this is a first-match-wins cascade:
/// 1. creator category is a preferred category -> 100
/// 2. past campaigns overlap the preferred categories -> up to 80
/// 3. tags loosely match preferred categories -> up to 60
/// 4. otherwise the floor of 30
pub fn calculate_category_match(
    sponsor: &SponsorProfile,
    creator: &CreatorProfile,
    dimension_weight: f64,
) -> (f64, Vec<MatchReason>) {
    if sponsor.prefers(&creator.category) {
        let score = 100.0;
        let reason = MatchReason::new(
            ReasonType::Category,
            format!("Creates content in the preferred {} category", creator.category),
            score * dimension_weight,
            true,
        );
        return (score, vec![reason]);
    }

    let past_overlap: Vec<&str> = sponsor
        .preferred_categories
        .iter()
        .filter(|c| creator.past_campaign_categories.contains(c))
        .map(String::as_str)
        .collect();

    if !past_overlap.is_empty() {
        let ratio = past_overlap.len() as f64 / sponsor.preferred_categories.len() as f64;
        let score = (ratio * 80.0).round();
        let reason = MatchReason::new(
            ReasonType::Category,
            format!("Past campaigns in {}", past_overlap.join(", ")),
            score * dimension_weight,
            false,
        );
        return (score, vec![reason]);
    }

    let matching_tags: Vec<&str> = creator
        .tags
        .iter()
        .filter(|tag| {
            sponsor
                .preferred_categories
                .iter()
                .any(|category| loosely_matches(tag, category))
        })
        .map(String::as_str)
        .collect();

    if !matching_tags.is_empty() {
        let score = (matching_tags.len() as f64 * 15.0).min(60.0);
        let reason = MatchReason::new(
            ReasonType::Category,
            format!("Related tags: {}", matching_tags.join(", ")),
            score * dimension_weight,
            false,
        );
        return (score, vec![reason]);
    }

    (CATEGORY_FLOOR_SCORE, Vec::new())
}

/// Case-insensitive substring containment in either direction
pub fn loosely_matches(tag: &str, category: &str) -> bool {
    let tag = tag.to_lowercase();
    let category = category.to_lowercase();
    tag.contains(&category) || category.contains(&tag)
}
