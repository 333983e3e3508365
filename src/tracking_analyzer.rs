use crate::models::{
    Category, CategoryReport, Issue, IssueSeverity, ProviderDetection, TrackingFindings,
};
use crate::scoring::{Penalties, category_score};
use once_cell::sync::Lazy;
use regex::Regex;

pub const TRACKING_PENALTIES: Penalties = Penalties {
    error: 18,
    warning: 10,
};

/// Pixel events we expect a store to fire, checked in this order.
pub const FACEBOOK_EVENTS: &[&str] = &[
    "Purchase",
    "AddToCart",
    "ViewContent",
    "InitiateCheckout",
    "AddPaymentInfo",
];

const MIN_FACEBOOK_EVENTS: usize = 3;

const ENHANCED_CONVERSION_MARKERS: &[&str] = &["enhanced_conversion", "user_data"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingProvider {
    GoogleTagManager,
    GoogleAnalytics4,
    GoogleAds,
    FacebookPixel,
    TikTokPixel,
}

impl TrackingProvider {
    pub fn name(&self) -> &'static str {
        match self {
            TrackingProvider::GoogleTagManager => "Google Tag Manager",
            TrackingProvider::GoogleAnalytics4 => "Google Analytics 4",
            TrackingProvider::GoogleAds => "Google Ads",
            TrackingProvider::FacebookPixel => "Facebook Pixel",
            TrackingProvider::TikTokPixel => "TikTok Pixel",
        }
    }

    pub fn detection<'a>(&self, findings: &'a TrackingFindings) -> &'a ProviderDetection {
        match self {
            TrackingProvider::GoogleTagManager => &findings.gtm,
            TrackingProvider::GoogleAnalytics4 => &findings.ga4,
            TrackingProvider::GoogleAds => &findings.google_ads,
            TrackingProvider::FacebookPixel => &findings.facebook_pixel,
            TrackingProvider::TikTokPixel => &findings.tiktok_pixel,
        }
    }

    fn detection_mut<'a>(&self, findings: &'a mut TrackingFindings) -> &'a mut ProviderDetection {
        match self {
            TrackingProvider::GoogleTagManager => &mut findings.gtm,
            TrackingProvider::GoogleAnalytics4 => &mut findings.ga4,
            TrackingProvider::GoogleAds => &mut findings.google_ads,
            TrackingProvider::FacebookPixel => &mut findings.facebook_pixel,
            TrackingProvider::TikTokPixel => &mut findings.tiktok_pixel,
        }
    }
}

/// Provider patterns. When a pattern has a capture group the group is the ID,
/// otherwise the whole match is.
const TAG_PATTERNS: &[(TrackingProvider, &str)] = &[
    (TrackingProvider::GoogleTagManager, r"GTM-[A-Z0-9]+"),
    (TrackingProvider::GoogleAnalytics4, r"G-[A-Z0-9]+"),
    (TrackingProvider::GoogleAds, r"AW-[0-9]+"),
    (
        TrackingProvider::FacebookPixel,
        r#"fbq\s*\(\s*['"]init['"]\s*,\s*['"](\d+)['"]\s*\)"#,
    ),
    (
        TrackingProvider::TikTokPixel,
        r#"ttq\.load\s*\(\s*['"]([A-Z0-9]+)['"]\s*\)"#,
    ),
];

static COMPILED_PATTERNS: Lazy<Vec<(TrackingProvider, Regex)>> = Lazy::new(|| {
    TAG_PATTERNS
        .iter()
        .map(|(provider, pattern)| {
            let regex = Regex::new(pattern).unwrap_or_else(|e| {
                panic!("tracking pattern for {} should be valid: {}", provider.name(), e)
            });
            (*provider, regex)
        })
        .collect()
});

/// Tags whose absence is an error on its own, with the issue copy for each.
const REQUIRED_TAGS: &[(TrackingProvider, &str, &str, &str)] = &[
    (
        TrackingProvider::GoogleTagManager,
        "Google Tag Manager not detected",
        "No GTM container found. Without it conversions cannot be tracked reliably.",
        "Missing essential data for campaign optimization",
    ),
    (
        TrackingProvider::GoogleAnalytics4,
        "Google Analytics 4 not detected",
        "No GA4 property found. Important traffic insights are lost.",
        "Visitor behaviour cannot be analyzed",
    ),
    (
        TrackingProvider::GoogleAds,
        "Google Ads conversion tag missing",
        "No Google Ads conversion tag detected. Campaigns cannot be optimized.",
        "Real ROAS unknown, optimization impossible",
    ),
];

pub struct TrackingAnalyzer;

impl TrackingAnalyzer {
    pub fn analyze(html: &str) -> CategoryReport<TrackingFindings> {
        let findings = Self::extract_findings(html);
        let issues = Self::check_findings(&findings);
        let score = category_score(&issues, Category::Tracking, TRACKING_PENALTIES);

        CategoryReport {
            findings,
            issues,
            score,
        }
    }

    fn extract_findings(html: &str) -> TrackingFindings {
        let mut findings = TrackingFindings::default();

        for (provider, regex) in COMPILED_PATTERNS.iter() {
            let slot = provider.detection_mut(&mut findings);
            for caps in regex.captures_iter(html) {
                if let Some(id) = caps.get(1).or_else(|| caps.get(0)) {
                    slot.ids.insert(id.as_str().to_string());
                }
            }
            slot.detected = !slot.ids.is_empty();
        }

        findings.facebook_events = FACEBOOK_EVENTS
            .iter()
            .filter(|event| {
                html.contains(&format!("'{}'", event)) || html.contains(&format!("\"{}\"", event))
            })
            .map(|event| event.to_string())
            .collect();

        let html_lower = html.to_lowercase();
        findings.enhanced_conversions = ENHANCED_CONVERSION_MARKERS
            .iter()
            .any(|marker| html_lower.contains(marker));

        findings
    }

    fn check_findings(tracking: &TrackingFindings) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (provider, title, description, impact) in REQUIRED_TAGS {
            if !provider.detection(tracking).detected {
                issues.push(tracking_issue(
                    IssueSeverity::Error,
                    title.to_string(),
                    description.to_string(),
                    impact,
                ));
            }
        }

        if !tracking.facebook_pixel.detected {
            issues.push(tracking_issue(
                IssueSeverity::Error,
                "Facebook Pixel not detected".to_string(),
                "No Facebook Pixel found. Meta Ads campaigns cannot run efficiently.".to_string(),
                "No remarketing and no conversion optimization",
            ));
        } else if tracking.facebook_events.len() < MIN_FACEBOOK_EVENTS {
            let found = if tracking.facebook_events.is_empty() {
                "none".to_string()
            } else {
                tracking.facebook_events.join(", ")
            };
            issues.push(tracking_issue(
                IssueSeverity::Warning,
                "Facebook Pixel incompletely configured".to_string(),
                format!(
                    "Pixel detected but only {} events configured: {}.",
                    tracking.facebook_events.len(),
                    found
                ),
                "Meta campaign optimization is limited",
            ));
        }

        issues
    }
}

fn tracking_issue(
    severity: IssueSeverity,
    title: String,
    description: String,
    impact: &str,
) -> Issue {
    Issue {
        severity,
        category: Category::Tracking,
        title,
        description,
        impact: impact.to_string(),
    }
}
