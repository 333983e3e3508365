use crate::models::{Category, CategoryReport, Issue, IssueSeverity, TechnicalFindings};
use crate::scoring::{Penalties, category_score};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

pub const TECHNICAL_PENALTIES: Penalties = Penalties {
    error: 15,
    warning: 8,
};

const MAX_EXTERNAL_SCRIPTS: usize = 15;

/// Any of these in the raw markup counts as a consent mechanism.
pub const COOKIE_CONSENT_MARKERS: &[&str] = &["cookie", "gdpr", "consent", "privacy"];

static VIEWPORT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='viewport']").expect("viewport selector should be valid")
});
static LAZY_IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("img[loading='lazy']").expect("lazy img selector should be valid")
});
static SCRIPT_SRC_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[src]").expect("script[src] selector should be valid"));
static STYLESHEET_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("link[rel~='stylesheet']").expect("stylesheet selector should be valid")
});

pub struct TechnicalAnalyzer;

impl TechnicalAnalyzer {
    pub fn analyze(
        document: &Html,
        html: &str,
        url: &str,
        domain: &str,
    ) -> CategoryReport<TechnicalFindings> {
        let findings = Self::extract_findings(document, html, url, domain);
        let issues = Self::check_findings(&findings);
        let score = category_score(&issues, Category::Technical, TECHNICAL_PENALTIES);

        CategoryReport {
            findings,
            issues,
            score,
        }
    }

    fn extract_findings(
        document: &Html,
        html: &str,
        url: &str,
        domain: &str,
    ) -> TechnicalFindings {
        let lazy_loading_count = document.select(&LAZY_IMG_SELECTOR).count();

        let script_sources: Vec<&str> = document
            .select(&SCRIPT_SRC_SELECTOR)
            .filter_map(|el| el.value().attr("src"))
            .collect();

        let minified_scripts = script_sources
            .iter()
            .filter(|src| src.contains(".min."))
            .count();

        let external_scripts = script_sources
            .iter()
            .filter(|src| Self::is_external_script(src, domain))
            .count();

        let html_lower = html.to_lowercase();

        TechnicalFindings {
            mobile_viewport: document.select(&VIEWPORT_SELECTOR).next().is_some(),
            https: Url::parse(url).is_ok_and(|parsed| parsed.scheme() == "https"),
            lazy_loading: lazy_loading_count > 0,
            lazy_loading_count,
            scripts_count: script_sources.len(),
            minified_scripts,
            external_scripts,
            stylesheets_count: document.select(&STYLESHEET_SELECTOR).count(),
            cookie_consent: COOKIE_CONSENT_MARKERS
                .iter()
                .any(|marker| html_lower.contains(marker)),
        }
    }

    /// An absolute script URL counts as external unless it mentions the target
    /// domain anywhere, so CDN subdomains of the site stay internal.
    fn is_external_script(src: &str, domain: &str) -> bool {
        src.starts_with("http") && !src.contains(domain)
    }

    fn check_findings(technical: &TechnicalFindings) -> Vec<Issue> {
        let mut issues = Vec::new();

        if !technical.mobile_viewport {
            issues.push(technical_issue(
                IssueSeverity::Error,
                "Missing viewport meta tag".to_string(),
                "The site is not optimized for mobile devices.",
                "Poor mobile experience, which also hurts SEO",
            ));
        }

        if !technical.https {
            issues.push(technical_issue(
                IssueSeverity::Error,
                "Site is not served over HTTPS".to_string(),
                "The connection is not secure. Google penalizes HTTP sites.",
                "Hurts trust and search ranking",
            ));
        }

        if technical.external_scripts > MAX_EXTERNAL_SCRIPTS {
            issues.push(technical_issue(
                IssueSeverity::Warning,
                format!("Many external scripts ({})", technical.external_scripts),
                "Too many external resources slow the site down.",
                "Slower page speed, higher bounce rate",
            ));
        }

        if !technical.cookie_consent {
            issues.push(technical_issue(
                IssueSeverity::Warning,
                "Cookie consent not detected".to_string(),
                "No cookie consent mechanism was found.",
                "Possible GDPR compliance problems",
            ));
        }

        issues
    }
}

fn technical_issue(
    severity: IssueSeverity,
    title: String,
    description: &str,
    impact: &str,
) -> Issue {
    Issue {
        severity,
        category: Category::Technical,
        title,
        description: description.to_string(),
        impact: impact.to_string(),
    }
}
