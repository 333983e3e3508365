use crate::fetcher::{Target, fetch_document, normalize_target};
use crate::http_client::build_http_client;
use crate::meta_ads::check_meta_ads;
use crate::models::{AnalysisResult, Scores};
use crate::opportunities::generate_opportunities;
use crate::platform::detect_platform;
use crate::scoring::overall_score;
use crate::seo_analyzer::SeoAnalyzer;
use crate::technical_analyzer::TechnicalAnalyzer;
use crate::tracking_analyzer::TrackingAnalyzer;
use anyhow::Result;
use scraper::Html;

/// Runs the whole audit for one page: fetch, then every analyzer in sequence.
#[derive(Clone)]
pub struct Auditor {
    client: reqwest::Client,
}

impl Auditor {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
        })
    }

    /// Never fails. A fetch error is recorded on the result and stops the run
    /// before any analyzer executes.
    pub async fn analyze(&self, input: &str) -> AnalysisResult {
        let target = normalize_target(input);
        tracing::info!(url = %target.url, "Analyzing");

        match fetch_document(&self.client, &target.url).await {
            Ok(html) => {
                tracing::info!(url = %target.url, bytes = html.len(), "Website fetched");
                analyze_html(&target, &html)
            }
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::warn!(url = %target.url, error = %message, "Fetch failed");
                failed_result(target, message)
            }
        }
    }
}

/// Pure analysis of already-fetched markup.
pub fn analyze_html(target: &Target, html: &str) -> AnalysisResult {
    let document = Html::parse_document(html);

    let platform = detect_platform(html);
    tracing::info!(platform = %platform, "Platform detected");

    let seo = SeoAnalyzer::analyze(&document);
    tracing::info!(score = seo.score, issues = seo.issues.len(), "SEO analyzed");

    let tracking = TrackingAnalyzer::analyze(html);
    tracing::info!(
        score = tracking.score,
        issues = tracking.issues.len(),
        "Tracking analyzed"
    );

    let technical = TechnicalAnalyzer::analyze(&document, html, &target.url, &target.domain);
    tracing::info!(
        score = technical.score,
        issues = technical.issues.len(),
        "Technical analyzed"
    );

    let meta_ads = check_meta_ads(&tracking.findings);
    tracing::info!(score = meta_ads.report.score, "Meta Ads checked");

    let mut scores = Scores {
        seo: Some(seo.score),
        tracking: Some(tracking.score),
        technical: Some(technical.score),
        meta_ads: Some(meta_ads.report.score),
        overall: None,
    };
    let overall = overall_score(&scores);
    scores.overall = Some(overall);

    let issues: Vec<_> = seo
        .issues
        .into_iter()
        .chain(tracking.issues)
        .chain(technical.issues)
        .chain(meta_ads.report.issues)
        .collect();

    let opportunities: Vec<_> = meta_ads
        .opportunity
        .into_iter()
        .chain(generate_opportunities(&tracking.findings, &issues, platform))
        .collect();

    tracing::info!(
        overall = overall,
        issues = issues.len(),
        opportunities = opportunities.len(),
        "Analysis complete"
    );

    AnalysisResult {
        url: target.url.clone(),
        domain: target.domain.clone(),
        platform: Some(platform.to_string()),
        seo: Some(seo.findings),
        technical: Some(technical.findings),
        tracking: Some(tracking.findings),
        meta_ads: Some(meta_ads.report.findings),
        scores,
        issues,
        opportunities,
        error: None,
        analyzed_at: chrono::Utc::now().to_rfc3339(),
    }
}

fn failed_result(target: Target, error: String) -> AnalysisResult {
    AnalysisResult {
        url: target.url,
        domain: target.domain,
        platform: None,
        seo: None,
        technical: None,
        tracking: None,
        meta_ads: None,
        scores: Scores::default(),
        issues: vec![],
        opportunities: vec![],
        error: Some(error),
        analyzed_at: chrono::Utc::now().to_rfc3339(),
    }
}
