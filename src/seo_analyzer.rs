use crate::models::{
    Category, CategoryReport, Issue, IssueSeverity, OpenGraphPresence, SeoFindings,
};
use crate::scoring::{Penalties, category_score, percentage};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

pub const SEO_PENALTIES: Penalties = Penalties {
    error: 15,
    warning: 8,
};

const TITLE_MIN_LENGTH: usize = 30;
const TITLE_MAX_LENGTH: usize = 60;
const META_DESCRIPTION_MIN_LENGTH: usize = 120;
const MISSING_ALT_ERROR_PERCENT: u8 = 50;
const H1_TEXTS_KEPT: usize = 3;

// Cached selectors to avoid repeated parsing and eliminate unwrap() calls
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector should be valid"));
static META_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='description']").expect("meta description selector should be valid")
});
static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("h1 selector should be valid"));
static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("img selector should be valid"));
static CANONICAL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("link[rel~='canonical']").expect("canonical selector should be valid")
});
static OG_TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property='og:title']").expect("og:title selector should be valid")
});
static OG_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property='og:description']")
        .expect("og:description selector should be valid")
});
static OG_IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property='og:image']").expect("og:image selector should be valid")
});
static JSON_LD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script[type='application/ld+json']")
        .expect("json-ld selector should be valid")
});

pub struct SeoAnalyzer;

impl SeoAnalyzer {
    pub fn analyze(document: &Html) -> CategoryReport<SeoFindings> {
        let findings = Self::extract_findings(document);
        let issues = Self::check_findings(&findings);
        let score = category_score(&issues, Category::Seo, SEO_PENALTIES);

        CategoryReport {
            findings,
            issues,
            score,
        }
    }

    fn extract_findings(document: &Html) -> SeoFindings {
        let title = Self::extract_title(document);
        let meta_description = Self::extract_meta_description(document);

        let h1_texts: Vec<String> = document
            .select(&H1_SELECTOR)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect();

        let total_images = document.select(&IMG_SELECTOR).count();
        let images_without_alt = document
            .select(&IMG_SELECTOR)
            .filter(|el| {
                el.value()
                    .attr("alt")
                    .is_none_or(|alt| alt.trim().is_empty())
            })
            .count();

        let canonical = document
            .select(&CANONICAL_SELECTOR)
            .next()
            .and_then(|el| el.value().attr("href"))
            .filter(|href| !href.is_empty())
            .map(|href| href.to_string());

        let og_tags = OpenGraphPresence {
            title: document.select(&OG_TITLE_SELECTOR).next().is_some(),
            description: document.select(&OG_DESC_SELECTOR).next().is_some(),
            image: document.select(&OG_IMAGE_SELECTOR).next().is_some(),
        };

        let structured_data_count = document.select(&JSON_LD_SELECTOR).count();

        SeoFindings {
            title_length: title.as_ref().map_or(0, |t| t.chars().count()),
            title,
            meta_description_length: meta_description.as_ref().map_or(0, |d| d.chars().count()),
            meta_description,
            h1_count: h1_texts.len(),
            h1_texts: h1_texts.into_iter().take(H1_TEXTS_KEPT).collect(),
            total_images,
            images_without_alt,
            images_alt_percentage: 100 - percentage(images_without_alt, total_images),
            canonical,
            og_tags,
            has_structured_data: structured_data_count > 0,
            structured_data_count,
        }
    }

    fn extract_title(document: &Html) -> Option<String> {
        document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
    }

    fn extract_meta_description(document: &Html) -> Option<String> {
        document
            .select(&META_DESC_SELECTOR)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }

    fn check_findings(seo: &SeoFindings) -> Vec<Issue> {
        let mut issues = Vec::new();

        // Title
        if seo.title.is_none() {
            issues.push(seo_issue(
                IssueSeverity::Error,
                "Missing title tag",
                "The page has no title tag. It is essential for search visibility.".to_string(),
                "Significantly hurts visibility in search engines",
            ));
        } else if seo.title_length < TITLE_MIN_LENGTH {
            issues.push(seo_issue(
                IssueSeverity::Warning,
                "Title tag too short",
                format!(
                    "The title is only {} characters long. Recommended: 50-60 characters.",
                    seo.title_length
                ),
                "Lower click-through rate in search results",
            ));
        } else if seo.title_length > TITLE_MAX_LENGTH {
            issues.push(seo_issue(
                IssueSeverity::Warning,
                "Title tag too long",
                format!(
                    "The title is {} characters long and will be truncated by Google.",
                    seo.title_length
                ),
                "The key message may be cut off",
            ));
        }

        // Meta description
        if seo.meta_description.is_none() {
            issues.push(seo_issue(
                IssueSeverity::Error,
                "Missing meta description",
                "The page has no meta description. Google will generate one from the content."
                    .to_string(),
                "+15-25% potential CTR with an optimized description",
            ));
        } else if seo.meta_description_length < META_DESCRIPTION_MIN_LENGTH {
            issues.push(seo_issue(
                IssueSeverity::Warning,
                "Meta description too short",
                format!(
                    "The description is only {} characters long. Recommended: 150-160.",
                    seo.meta_description_length
                ),
                "Not using all the space available to persuade searchers",
            ));
        }

        // H1 headings
        if seo.h1_count == 0 {
            issues.push(seo_issue(
                IssueSeverity::Error,
                "Missing H1 tag",
                "The page has no H1 heading. It matters for the page's SEO structure.".to_string(),
                "Makes it harder for Google to understand the page",
            ));
        } else if seo.h1_count > 1 {
            issues.push(Issue {
                severity: IssueSeverity::Warning,
                category: Category::Seo,
                title: format!("Multiple H1 tags ({})", seo.h1_count),
                description: "The page has several H1 headings. Recommended: a single H1 per page."
                    .to_string(),
                impact: "May dilute relevance for the primary keyword".to_string(),
            });
        }

        // Images without alt text
        if seo.images_without_alt > 0 {
            let missing_pct = percentage(seo.images_without_alt, seo.total_images);
            let severity = if missing_pct >= MISSING_ALT_ERROR_PERCENT {
                IssueSeverity::Error
            } else {
                IssueSeverity::Warning
            };
            issues.push(Issue {
                severity,
                category: Category::Seo,
                title: format!(
                    "{} images without ALT ({}%)",
                    seo.images_without_alt, missing_pct
                ),
                description: "Images without alternative text are not indexed in Google Images."
                    .to_string(),
                impact: "Losing organic traffic from Google Images".to_string(),
            });
        }

        if seo.canonical.is_none() {
            issues.push(seo_issue(
                IssueSeverity::Warning,
                "Missing canonical URL",
                "No canonical tag detected. Risk of duplicate content.".to_string(),
                "May cause indexing problems",
            ));
        }

        let missing_og = seo.og_tags.missing();
        if !missing_og.is_empty() {
            issues.push(seo_issue(
                IssueSeverity::Warning,
                "Incomplete Open Graph tags",
                format!(
                    "Missing: {}. This affects how the page is shared on social media.",
                    missing_og.join(", ")
                ),
                "Shared links will look less attractive",
            ));
        }

        if !seo.has_structured_data {
            issues.push(seo_issue(
                IssueSeverity::Warning,
                "Missing structured data (Schema.org)",
                "No JSON-LD markup detected. Rich snippets in Google are lost.".to_string(),
                "No rating stars, price or availability in search results",
            ));
        }

        issues
    }
}

fn seo_issue(severity: IssueSeverity, title: &str, description: String, impact: &str) -> Issue {
    Issue {
        severity,
        category: Category::Seo,
        title: title.to_string(),
        description,
        impact: impact.to_string(),
    }
}
