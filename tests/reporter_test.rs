use pagescout::models::{
    AnalysisResult, AuditResponse, Category, Issue, IssueSeverity, Opportunity,
    OpportunityCategory, Scores,
};
use pagescout::reporter::{BOOKING_URL, Reporter, SUMMARY_ISSUE_LIMIT};
use std::fs;

fn create_test_issue(severity: IssueSeverity, title: &str) -> Issue {
    Issue {
        severity,
        category: Category::Seo,
        title: title.to_string(),
        description: format!("{} description", title),
        impact: "impact".to_string(),
    }
}

fn create_test_result(issues: Vec<Issue>) -> AnalysisResult {
    AnalysisResult {
        url: "https://example.com".to_string(),
        domain: "example.com".to_string(),
        platform: Some("Shopify".to_string()),
        seo: None,
        technical: None,
        tracking: None,
        meta_ads: None,
        scores: Scores {
            seo: Some(77),
            tracking: Some(64),
            technical: Some(92),
            meta_ads: Some(40),
            overall: Some(68),
        },
        issues,
        opportunities: vec![Opportunity {
            category: OpportunityCategory::Seo,
            title: "On-page SEO optimization".to_string(),
            description: "d".to_string(),
            potential: "p".to_string(),
        }],
        error: None,
        analyzed_at: "2024-01-01T00:00:00+00:00".to_string(),
    }
}

#[test]
fn test_render_report_header_and_scores() {
    let report = Reporter::render_report(&create_test_result(vec![]));

    assert!(report.contains("example.com | Platform: Shopify"));
    assert!(report.contains(
        "Overall score: 68/100 | SEO: 77 | Tracking: 64 | Technical: 92 | Meta Ads: 40"
    ));
    assert!(report.contains("Key Growth Gaps:"));
    assert!(report.contains("Revenue Opportunity:"));
    assert!(report.contains("Next Step:"));
}

#[test]
fn test_render_report_ends_with_booking_link() {
    let report = Reporter::render_report(&create_test_result(vec![]));

    let booking_line = format!("→ Book a call: {}\n---\n", BOOKING_URL);
    assert!(report.ends_with(&booking_line), "report: {}", report);
}

#[test]
fn test_render_report_truncates_issues() {
    let issues: Vec<_> = (1..=7)
        .map(|i| create_test_issue(IssueSeverity::Warning, &format!("Issue {}", i)))
        .collect();
    let report = Reporter::render_report(&create_test_result(issues));

    for i in 1..=SUMMARY_ISSUE_LIMIT {
        assert!(report.contains(&format!("Issue {}:", i)));
    }
    assert!(!report.contains("Issue 6:"));
    assert!(!report.contains("Issue 7:"));
}

#[test]
fn test_render_report_severity_glyphs() {
    let issues = vec![
        create_test_issue(IssueSeverity::Error, "Broken"),
        create_test_issue(IssueSeverity::Warning, "Weak"),
    ];
    let report = Reporter::render_report(&create_test_result(issues));

    assert!(report.contains("• 🔴 Broken: Broken description"));
    assert!(report.contains("• 🟡 Weak: Weak description"));
}

#[test]
fn test_render_report_for_failed_fetch() {
    let mut result = create_test_result(vec![]);
    result.platform = None;
    result.scores = Scores::default();
    result.error = Some("connection refused".to_string());

    let report = Reporter::render_report(&result);
    assert!(report.contains("Platform: Unknown"));
    assert!(report.contains("Overall score: N/A/100"));
}

#[test]
fn test_response_serializes_flat_with_report() {
    let response = Reporter::build_response(create_test_result(vec![create_test_issue(
        IssueSeverity::Error,
        "Missing title tag",
    )]));
    let json: serde_json::Value = serde_json::to_value(&response).unwrap();

    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["scores"]["overall"], 68);
    assert_eq!(json["issues"][0]["severity"], "error");
    assert_eq!(json["issues"][0]["category"], "seo");
    assert_eq!(json["opportunities"][0]["category"], "seo");
    assert!(json["report"].as_str().unwrap().contains("Missing title tag"));
    assert!(json.get("error").is_none());
}

#[test]
fn test_failed_result_omits_scores() {
    let mut result = create_test_result(vec![]);
    result.scores = Scores::default();
    result.error = Some("timeout".to_string());

    let json = serde_json::to_value(Reporter::build_response(result)).unwrap();
    assert_eq!(json["error"], "timeout");
    assert_eq!(json["scores"], serde_json::json!({}));
}

#[test]
fn test_save_json_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("audit.json");
    let filename = path.to_str().unwrap();

    let response = Reporter::build_response(create_test_result(vec![]));
    Reporter::save_json_report(&response, filename).expect("Failed to save report");

    let content = fs::read_to_string(filename).unwrap();
    let loaded: AuditResponse = serde_json::from_str(&content).unwrap();
    assert_eq!(loaded.result.domain, "example.com");
    assert_eq!(loaded.result.scores.overall, Some(68));
    assert_eq!(loaded.report, response.report);
}

#[test]
fn test_print_text_report_does_not_panic() {
    let issues = vec![create_test_issue(IssueSeverity::Error, "Broken")];
    Reporter::print_text_report(&Reporter::build_response(create_test_result(issues)));

    let mut failed = create_test_result(vec![]);
    failed.error = Some("connection refused".to_string());
    Reporter::print_text_report(&Reporter::build_response(failed));
}
