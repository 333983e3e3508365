//! Ad-activity heuristic.
//!
//! No ads library is queried. A live Facebook Pixel is taken as the only
//! signal that the site runs Meta campaigns.

use crate::models::{
    Category, CategoryReport, Issue, IssueSeverity, MetaAdsFindings, Opportunity,
    OpportunityCategory, TrackingFindings,
};

pub const PIXEL_PRESENT_SCORE: u8 = 70;
pub const PIXEL_ABSENT_SCORE: u8 = 40;

pub struct MetaAdsReport {
    pub report: CategoryReport<MetaAdsFindings>,
    pub opportunity: Option<Opportunity>,
}

pub fn check_meta_ads(tracking: &TrackingFindings) -> MetaAdsReport {
    let ads_detected = tracking.facebook_pixel.detected;

    if ads_detected {
        MetaAdsReport {
            report: CategoryReport {
                findings: MetaAdsFindings {
                    checked: true,
                    ads_detected,
                    ad_formats: vec![],
                    notes: vec![
                        "Facebook Pixel active - Meta campaigns are likely running".to_string(),
                    ],
                },
                issues: vec![],
                score: PIXEL_PRESENT_SCORE,
            },
            opportunity: Some(Opportunity {
                category: OpportunityCategory::MetaAds,
                title: "Full Meta Ads audit".to_string(),
                description: "For a complete review of the active ads, get in touch for a free \
                              audit of the Meta Business account."
                    .to_string(),
                potential: "15-30% CPA improvements are common".to_string(),
            }),
        }
    } else {
        MetaAdsReport {
            report: CategoryReport {
                findings: MetaAdsFindings {
                    checked: true,
                    ads_detected,
                    ad_formats: vec![],
                    notes: vec![],
                },
                issues: vec![Issue {
                    severity: IssueSeverity::Warning,
                    category: Category::MetaAds,
                    title: "Meta Ads presence unknown".to_string(),
                    description: "Without a Facebook Pixel, advertising activity cannot be verified."
                        .to_string(),
                    impact: "Missed opportunity on the largest social channel".to_string(),
                }],
                score: PIXEL_ABSENT_SCORE,
            },
            opportunity: None,
        }
    }
}
