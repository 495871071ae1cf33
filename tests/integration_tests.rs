// Integration tests for Sponsor Match

use sponsor_match::core::Matcher;
use sponsor_match::models::{
    AudienceBreakdown, BudgetRange, Confidence, CreatorProfile, CreatorType, GoalType,
    MatchStatus, RooHistoryEntry, ScoringWeights, SponsorGoal, SponsorProfile, TargetGender,
};
use std::collections::HashMap;

fn create_sponsor(id: &str) -> SponsorProfile {
    SponsorProfile {
        id: id.to_string(),
        name: format!("Sponsor {}", id),
        industry: "Technology".to_string(),
        trust_score: 85.0,
        collaboration_score: 80.0,
        preferred_categories: vec!["Teknoloji".to_string(), "Oyun".to_string()],
        budget_range: BudgetRange::new(50_000.0, 100_000.0),
        goals: vec![SponsorGoal {
            goal_type: GoalType::AudienceReach,
            target_age_group: Some("18-24".to_string()),
            target_gender: Some(TargetGender::Male),
            target_locations: vec!["Istanbul".to_string(), "Izmir".to_string()],
            target_categories: vec!["Teknoloji".to_string()],
            min_roi: Some(15.0),
            min_roo: Some(70.0),
            budget_range: None,
            priority: 8,
        }],
    }
}

fn create_creator(id: &str, category: &str, trust: f64) -> CreatorProfile {
    let mut age_groups = HashMap::new();
    age_groups.insert("18-24".to_string(), 45.0);
    age_groups.insert("25-34".to_string(), 30.0);

    CreatorProfile {
        id: id.to_string(),
        name: format!("Creator {}", id),
        creator_type: CreatorType::Youtuber,
        category: category.to_string(),
        followers: 500_000,
        avg_views: 80_000,
        engagement_rate: 7.0,
        avg_roi: 25.0,
        avg_roo: 86.0,
        completed_campaigns: 12,
        trust_score: trust,
        verified: true,
        audience: AudienceBreakdown {
            age_groups,
            gender: sponsor_match::models::GenderSplit {
                male: 65.0,
                female: 35.0,
            },
            top_locations: vec!["Istanbul".to_string(), "Ankara".to_string()],
        },
        pricing: BudgetRange::new(60_000.0, 90_000.0),
        tags: vec!["teknoloji".to_string(), "inceleme".to_string()],
        past_campaign_categories: vec!["Teknoloji".to_string()],
        roo_history: vec![RooHistoryEntry {
            category: "Teknoloji".to_string(),
            avg_score: 88.0,
            campaign_count: 5,
        }],
    }
}

fn create_weak_creator(id: &str) -> CreatorProfile {
    CreatorProfile {
        id: id.to_string(),
        name: format!("Creator {}", id),
        creator_type: CreatorType::Club,
        category: "Yemek".to_string(),
        followers: 1_000,
        avg_views: 100,
        engagement_rate: 1.0,
        avg_roi: 2.0,
        avg_roo: 20.0,
        completed_campaigns: 0,
        trust_score: 20.0,
        verified: false,
        audience: AudienceBreakdown::default(),
        pricing: BudgetRange::new(400_000.0, 600_000.0),
        tags: vec![],
        past_campaign_categories: vec![],
        roo_history: vec![],
    }
}

#[test]
fn test_integration_end_to_end_matching() {
    let matcher = Matcher::with_default_weights();
    let sponsor = create_sponsor("s1");

    let creators = vec![
        create_creator("1", "Teknoloji", 95.0),
        create_weak_creator("2"),
        create_creator("3", "Oyun", 70.0),
        create_creator("4", "Vlog", 60.0),
        create_weak_creator("5"),
    ];

    let result = matcher.find_matches_for_sponsor(&sponsor, &creators, 10);

    assert_eq!(result.len(), 3, "weak creators should fall below the threshold");
    assert_eq!(result[0].creator_id, "1");
    assert_eq!(result[0].confidence, Confidence::High);

    for m in &result {
        assert!(m.match_score >= 50);
        assert_eq!(m.status, MatchStatus::New);
        assert!(!m.match_reasons.is_empty());
    }

    for i in 1..result.len() {
        assert!(
            result[i - 1].match_score >= result[i].match_score,
            "Matches not sorted by score"
        );
    }
}

#[test]
fn test_reasons_are_sorted_and_explain_match() {
    let matcher = Matcher::with_default_weights();
    let result = matcher.score_pair(&create_sponsor("s1"), &create_creator("1", "Teknoloji", 95.0));

    assert_eq!(result.category_match, 100);
    assert!(result.match_reasons.iter().any(|r| r.highlight));
    for pair in result.match_reasons.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let matcher = Matcher::with_default_weights();
    let sponsor = create_sponsor("s1");
    let creator = create_creator("1", "Oyun", 75.0);

    let first = matcher.score_pair(&sponsor, &creator);
    let second = matcher.score_pair(&sponsor, &creator);

    assert_eq!(first.match_score, second.match_score);
    assert_eq!(first.audience_match, second.audience_match);
    assert_eq!(first.performance_match, second.performance_match);
    assert_eq!(first.category_match, second.category_match);
    assert_eq!(first.budget_match, second.budget_match);
    assert_eq!(first.match_reasons, second.match_reasons);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_sponsor_and_creator_lookups_agree() {
    let matcher = Matcher::with_default_weights();
    let sponsor = create_sponsor("s1");
    let creator = create_creator("1", "Teknoloji", 80.0);

    let for_sponsor = matcher.find_matches_for_sponsor(&sponsor, &[creator.clone()], 10);
    let for_creator = matcher.find_matches_for_creator(&creator, &[sponsor], 10);

    assert_eq!(for_sponsor.len(), 1);
    assert_eq!(for_creator.len(), 1);
    assert_eq!(for_sponsor[0].match_score, for_creator[0].match_score);
}

#[test]
fn test_max_limit_enforcement() {
    let matcher = Matcher::with_default_weights();
    let sponsor = create_sponsor("s1");

    let creators: Vec<CreatorProfile> = (0..50)
        .map(|i| create_creator(&i.to_string(), "Teknoloji", 50.0 + i as f64))
        .collect();

    let result = matcher.find_matches_for_sponsor(&sponsor, &creators, 10);
    assert_eq!(result.len(), 10, "Should not exceed limit of 10");

    let result = matcher.find_matches_for_sponsor(&sponsor, &creators[..3], 10);
    assert!(result.len() <= 3);
}

#[test]
fn test_score_range() {
    let matcher = Matcher::with_default_weights().with_min_score(0);
    let sponsor = create_sponsor("s1");

    let creators = vec![
        create_creator("1", "Teknoloji", 100.0),
        create_creator("2", "Oyun", 0.0),
        create_weak_creator("3"),
    ];

    for m in matcher.find_matches_for_sponsor(&sponsor, &creators, 10) {
        assert!(m.match_score <= 100);
        for sub in [m.audience_match, m.performance_match, m.category_match, m.budget_match] {
            assert!(sub <= 100, "Sub-score {} is out of range", sub);
        }
    }
}

#[test]
fn test_injected_weights() {
    let budget_only = ScoringWeights {
        audience: 0.0,
        performance: 0.0,
        category: 0.0,
        budget: 1.0,
        trust: 0.0,
    };
    let matcher = Matcher::new(budget_only).with_min_score(0);
    let result = matcher.score_pair(&create_sponsor("s1"), &create_weak_creator("1"));

    assert_eq!(result.match_score, 20);
}
