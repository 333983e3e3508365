use crate::models::{Category, Issue, IssueSeverity, Scores};

/// Score substituted for a category that never ran.
pub const MISSING_CATEGORY_SCORE: u8 = 50;

/// Category weights for the overall score. Tracking dominates; the ad heuristic
/// counts least because it is the least reliable signal.
pub const SEO_WEIGHT: f64 = 0.30;
pub const TRACKING_WEIGHT: f64 = 0.35;
pub const TECHNICAL_WEIGHT: f64 = 0.20;
pub const META_ADS_WEIGHT: f64 = 0.15;

/// Per-severity deductions applied to a category's own issues.
#[derive(Debug, Clone, Copy)]
pub struct Penalties {
    pub error: i32,
    pub warning: i32,
}

/// Starts at 100, deducts for every issue of `category`, clamps to `0..=100`.
pub fn category_score(issues: &[Issue], category: Category, penalties: Penalties) -> u8 {
    let deducted: i32 = issues
        .iter()
        .filter(|issue| issue.category == category)
        .map(|issue| match issue.severity {
            IssueSeverity::Error => penalties.error,
            IssueSeverity::Warning => penalties.warning,
        })
        .sum();

    (100 - deducted).clamp(0, 100) as u8
}

/// Weighted combination of the four category scores.
///
/// Missing categories count as [`MISSING_CATEGORY_SCORE`]; when no category
/// ran at all the overall score is 0.
pub fn overall_score(scores: &Scores) -> u8 {
    if scores.is_empty() {
        return 0;
    }

    let weighted = [
        (scores.seo, SEO_WEIGHT),
        (scores.tracking, TRACKING_WEIGHT),
        (scores.technical, TECHNICAL_WEIGHT),
        (scores.meta_ads, META_ADS_WEIGHT),
    ]
    .iter()
    .map(|(score, weight)| f64::from(score.unwrap_or(MISSING_CATEGORY_SCORE)) * weight)
    .sum::<f64>();

    weighted.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Percentage rounded half-to-even, with the denominator floored at 1.
pub fn percentage(part: usize, total: usize) -> u8 {
    let ratio = part as f64 / total.max(1) as f64;
    (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}
