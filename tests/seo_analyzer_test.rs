mod server;

use pagescout::models::{Category, IssueSeverity};
use pagescout::seo_analyzer::SeoAnalyzer;
use scraper::Html;
use server::{bare_page, complete_seo_page};

fn head_page(head: &str, body: &str) -> String {
    format!(
        "<html><head>{}</head><body>{}</body></html>",
        head, body
    )
}

#[test]
fn test_complete_page_has_no_issues() {
    let document = Html::parse_document(&complete_seo_page());
    let report = SeoAnalyzer::analyze(&document);

    assert!(report.issues.is_empty(), "unexpected issues: {:?}", report.issues);
    assert_eq!(report.score, 100);
    assert_eq!(report.findings.title_length, 45);
    assert_eq!(report.findings.meta_description_length, 200);
    assert_eq!(report.findings.h1_count, 1);
    assert_eq!(report.findings.total_images, 0);
    assert_eq!(report.findings.images_alt_percentage, 100);
    assert_eq!(report.findings.structured_data_count, 1);
    assert!(report.findings.og_tags.missing().is_empty());
}

#[test]
fn test_bare_page_errors() {
    let document = Html::parse_document(&bare_page());
    let report = SeoAnalyzer::analyze(&document);

    let errors = report
        .issues
        .iter()
        .filter(|issue| issue.severity == IssueSeverity::Error)
        .count();

    assert!(errors >= 3);
    assert!(report.score <= 100 - 15 * 3);
    assert!(report.issues.iter().all(|issue| issue.category == Category::Seo));
    // 3 errors and canonical/OG/structured-data warnings
    assert_eq!(report.score, 100 - 15 * 3 - 8 * 3);
}

#[test]
fn test_seo_rules() {
    let base_head = r#"
        <title>Handmade Leather Goods and Accessories Online</title>
        <link rel="canonical" href="https://example.com/">
        <meta property="og:title" content="t">
        <meta property="og:description" content="d">
        <meta property="og:image" content="i">
        <script type="application/ld+json">{}</script>"#;
    let description = format!(r#"<meta name="description" content="{}">"#, "d".repeat(150));

    let test_cases = [
        TestCase {
            html: head_page(
                &format!("<title>Too short</title>{}", description),
                "<h1>x</h1>",
            ),
            title: "Title tag too short",
            severity: IssueSeverity::Warning,
            description: "short title",
        },
        TestCase {
            html: head_page(
                &format!("<title>{}</title>{}", "t".repeat(61), description),
                "<h1>x</h1>",
            ),
            title: "Title tag too long",
            severity: IssueSeverity::Warning,
            description: "long title",
        },
        TestCase {
            html: head_page(base_head, "<h1>x</h1>"),
            title: "Missing meta description",
            severity: IssueSeverity::Error,
            description: "missing meta description",
        },
        TestCase {
            html: head_page(
                &format!(
                    r#"{}<meta name="description" content="{}">"#,
                    base_head,
                    "d".repeat(119)
                ),
                "<h1>x</h1>",
            ),
            title: "Meta description too short",
            severity: IssueSeverity::Warning,
            description: "short meta description",
        },
        TestCase {
            html: head_page(&format!("{}{}", base_head, description), ""),
            title: "Missing H1 tag",
            severity: IssueSeverity::Error,
            description: "missing H1",
        },
        TestCase {
            html: head_page(
                &format!("{}{}", base_head, description),
                "<h1>a</h1><h1>b</h1>",
            ),
            title: "Multiple H1 tags (2)",
            severity: IssueSeverity::Warning,
            description: "multiple H1",
        },
        TestCase {
            html: head_page(
                &format!("{}{}", base_head, description),
                r#"<h1>x</h1><img src="a.png" alt="a"><img src="b.png" alt="b"><img src="c.png">"#,
            ),
            title: "1 images without ALT (33%)",
            severity: IssueSeverity::Warning,
            description: "a third of images without alt",
        },
        TestCase {
            html: head_page(
                &format!("{}{}", base_head, description),
                r#"<h1>x</h1><img src="a.png" alt="a"><img src="b.png" alt="">"#,
            ),
            title: "1 images without ALT (50%)",
            severity: IssueSeverity::Error,
            description: "half the images without alt",
        },
        TestCase {
            html: head_page(
                &format!(
                    r#"<title>Handmade Leather Goods and Accessories Online</title>{}<meta property="og:description" content="d">"#,
                    description
                ),
                "<h1>x</h1>",
            ),
            title: "Incomplete Open Graph tags",
            severity: IssueSeverity::Warning,
            description: "missing OG tags",
        },
    ];

    for case in test_cases {
        let document = Html::parse_document(&case.html);
        let report = SeoAnalyzer::analyze(&document);

        let issues: Vec<_> = report
            .issues
            .iter()
            .filter(|issue| issue.title == case.title)
            .collect();

        assert!(
            !issues.is_empty(),
            "Should detect {} (issues: {:?})",
            case.description,
            report.issues
        );

        assert_eq!(
            issues[0].severity, case.severity,
            "Incorrect severity for {}",
            case.description
        );
    }
}

#[test]
fn test_missing_open_graph_subset_is_named_in_order() {
    let document = Html::parse_document(&head_page(
        r#"<meta property="og:description" content="d">"#,
        "",
    ));
    let report = SeoAnalyzer::analyze(&document);

    let og_issue = report
        .issues
        .iter()
        .find(|issue| issue.title == "Incomplete Open Graph tags")
        .expect("OG issue");
    assert!(og_issue.description.starts_with("Missing: title, image."));
}

#[test]
fn test_title_boundaries_are_inclusive() {
    for length in [30, 60] {
        let document = Html::parse_document(&head_page(
            &format!("<title>{}</title>", "t".repeat(length)),
            "",
        ));
        let report = SeoAnalyzer::analyze(&document);
        assert!(
            !report
                .issues
                .iter()
                .any(|issue| issue.title.starts_with("Title tag")),
            "title of {} chars should pass",
            length
        );
    }
}

struct TestCase {
    html: String,
    title: &'static str,
    severity: IssueSeverity,
    description: &'static str,
}
