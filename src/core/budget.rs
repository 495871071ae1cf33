use crate::models::{BudgetRange, MatchReason, ReasonType};

const NEGOTIABLE_GAP: f64 = 0.2;
const NEGOTIABLE_SCORE: f64 = 60.0;
const DISJOINT_SCORE: f64 = 20.0;

/// Calculate budget compatibility between a sponsor budget and creator pricing (0-100)
///
/// A zero-width sponsor budget counts as full overlap when the single value
/// falls inside the creator's pricing range, and as disjoint otherwise.
pub fn calculate_budget_match(
    budget: &BudgetRange,
    pricing: &BudgetRange,
    dimension_weight: f64,
) -> (f64, Vec<MatchReason>) {
    let overlap_pct = if budget.width() == 0.0 {
        pricing.contains(budget.min).then_some(100.0)
    } else {
        let overlap = budget.max.min(pricing.max) - budget.min.max(pricing.min);
        (overlap > 0.0).then(|| overlap / budget.width() * 100.0)
    };

    let Some(overlap_pct) = overlap_pct else {
        return disjoint_score(budget, pricing, dimension_weight);
    };

    if overlap_pct >= 50.0 {
        let score = (overlap_pct + 20.0).min(100.0);
        let reason = MatchReason::new(
            ReasonType::Budget,
            format!("Budget covers {:.0}% of the pricing range", overlap_pct),
            score * dimension_weight,
            overlap_pct >= 70.0,
        );
        (score, vec![reason])
    } else {
        let score = overlap_pct + 30.0;
        let reason = MatchReason::new(
            ReasonType::Budget,
            format!("Partial budget overlap ({:.0}%)", overlap_pct),
            score * dimension_weight * 0.5,
            false,
        );
        (score.min(100.0), vec![reason])
    }
}

/// Ranges do not overlap: a small gap is still negotiable
///
/// The gap is measured between the two range minimums, relative to the
/// creator's minimum price.
fn disjoint_score(
    budget: &BudgetRange,
    pricing: &BudgetRange,
    dimension_weight: f64,
) -> (f64, Vec<MatchReason>) {
    let gap = (pricing.min - budget.min).abs();
    let gap_pct = if pricing.min > 0.0 {
        gap / pricing.min
    } else if gap == 0.0 {
        0.0
    } else {
        f64::INFINITY
    };

    if gap_pct <= NEGOTIABLE_GAP {
        let reason = MatchReason::new(
            ReasonType::Budget,
            format!("Budget is close to pricing ({:.0}% gap), negotiable", gap_pct * 100.0),
            NEGOTIABLE_SCORE * dimension_weight * 0.5,
            false,
        );
        (NEGOTIABLE_SCORE, vec![reason])
    } else {
        (DISJOINT_SCORE, Vec::new())
    }
}
