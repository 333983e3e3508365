use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub url: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoFindings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechnicalFindings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<TrackingFindings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_ads: Option<MetaAdsFindings>,
    pub scores: Scores,
    pub issues: Vec<Issue>,
    pub opportunities: Vec<Opportunity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub analyzed_at: String,
}

/// Category scores, each in `0..=100`. A `None` category was never run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_ads: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<u8>,
}

impl Scores {
    pub fn is_empty(&self) -> bool {
        self.seo.is_none()
            && self.tracking.is_none()
            && self.technical.is_none()
            && self.meta_ads.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Seo,
    Tracking,
    Technical,
    MetaAds,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Seo => "seo",
            Category::Tracking => "tracking",
            Category::Technical => "technical",
            Category::MetaAds => "meta_ads",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub category: OpportunityCategory,
    pub title: String,
    pub description: String,
    pub potential: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityCategory {
    MetaAds,
    GoogleAds,
    Seo,
    Platform,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoFindings {
    pub title: Option<String>,
    pub title_length: usize,
    pub meta_description: Option<String>,
    pub meta_description_length: usize,
    pub h1_count: usize,
    pub h1_texts: Vec<String>,
    pub total_images: usize,
    pub images_without_alt: usize,
    pub images_alt_percentage: u8,
    pub canonical: Option<String>,
    pub og_tags: OpenGraphPresence,
    pub has_structured_data: bool,
    pub structured_data_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphPresence {
    pub title: bool,
    pub description: bool,
    pub image: bool,
}

impl OpenGraphPresence {
    /// Names of the absent properties, in title/description/image order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("title", self.title),
            ("description", self.description),
            ("image", self.image),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDetection {
    pub detected: bool,
    pub ids: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingFindings {
    pub gtm: ProviderDetection,
    pub ga4: ProviderDetection,
    pub google_ads: ProviderDetection,
    pub facebook_pixel: ProviderDetection,
    pub tiktok_pixel: ProviderDetection,
    pub facebook_events: Vec<String>,
    pub enhanced_conversions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalFindings {
    pub mobile_viewport: bool,
    pub https: bool,
    pub lazy_loading: bool,
    pub lazy_loading_count: usize,
    pub scripts_count: usize,
    pub minified_scripts: usize,
    pub external_scripts: usize,
    pub stylesheets_count: usize,
    pub cookie_consent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaAdsFindings {
    pub checked: bool,
    pub ads_detected: bool,
    /// Ad formats seen in the account. Stays empty until an ads library is queried.
    #[serde(default)]
    pub ad_formats: Vec<String>,
    pub notes: Vec<String>,
}

/// What a single analyzer hands back to the pipeline.
#[derive(Debug, Clone)]
pub struct CategoryReport<F> {
    pub findings: F,
    pub issues: Vec<Issue>,
    pub score: u8,
}

/// The analysis result with its rendered summary attached, as returned to
/// callers and written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub report: String,
}
