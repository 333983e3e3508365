use crate::models::{Category, Issue, Opportunity, OpportunityCategory, TrackingFindings};
use crate::platform::is_recognized_ecommerce;

const MIN_SEO_ISSUES: usize = 2;

/// Derives growth opportunities from the finished analysis. Each rule is
/// checked independently and the output order is fixed: Google Ads, SEO,
/// platform.
pub fn generate_opportunities(
    tracking: &TrackingFindings,
    issues: &[Issue],
    platform: &str,
) -> Vec<Opportunity> {
    let mut opportunities = Vec::new();

    if !tracking.google_ads.detected {
        opportunities.push(Opportunity {
            category: OpportunityCategory::GoogleAds,
            title: "Set up Google Ads conversion tracking".to_string(),
            description: "With correct tracking, campaigns can be optimized for real ROAS."
                .to_string(),
            potential: "+25-40% efficiency on the ads budget".to_string(),
        });
    }

    let seo_issues = issues
        .iter()
        .filter(|issue| issue.category == Category::Seo)
        .count();
    if seo_issues >= MIN_SEO_ISSUES {
        opportunities.push(Opportunity {
            category: OpportunityCategory::Seo,
            title: "On-page SEO optimization".to_string(),
            description: "Fixing the detected SEO problems can grow organic traffic.".to_string(),
            potential: "+30-50% organic traffic in 3-6 months".to_string(),
        });
    }

    if is_recognized_ecommerce(platform) {
        opportunities.push(Opportunity {
            category: OpportunityCategory::Platform,
            title: format!("{} specific optimization", platform),
            description: format!(
                "We have hands-on experience with {} and know exactly what works.",
                platform
            ),
            potential: "Fast implementation, measurable results".to_string(),
        });
    }

    opportunities
}
