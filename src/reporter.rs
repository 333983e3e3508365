use crate::models::{AnalysisResult, AuditResponse, IssueSeverity};
use anyhow::{Context, Result};
use colored::*;
use std::fs::File;
use std::io::Write;

/// Issues shown in the executive summary.
pub const SUMMARY_ISSUE_LIMIT: usize = 5;

const REVENUE_OPPORTUNITY: &str = "\
Revenue Opportunity:
Based on this analysis, we estimate the following improvements are possible:
• Conversions: +25-40% with correct tracking and optimized campaigns
• Cost per acquisition: -15-25% through efficient campaign structures
• Organic traffic: +30-50% in 3-6 months with SEO fixes
";

const NEXT_STEP: &str = "\
Next Step:
Have 15 minutes for a call? We'll review your ad accounts together and show you exactly what can be optimized.
";

pub const BOOKING_URL: &str = "https://fulloutmedia.ro/contact";

pub struct Reporter;

impl Reporter {
    /// Renders the fixed-template executive summary.
    pub fn render_report(result: &AnalysisResult) -> String {
        let platform = result.platform.as_deref().unwrap_or("Unknown");
        let scores = &result.scores;

        let mut report = String::new();
        report.push_str("\n---\nWebsite Snapshot:\n");
        report.push_str(&format!("{} | Platform: {}\n", result.domain, platform));
        report.push_str(&format!(
            "Overall score: {}/100 | SEO: {} | Tracking: {} | Technical: {} | Meta Ads: {}\n",
            score_or_na(scores.overall),
            score_or_na(scores.seo),
            score_or_na(scores.tracking),
            score_or_na(scores.technical),
            score_or_na(scores.meta_ads),
        ));

        report.push_str("\nKey Growth Gaps:\n");
        for issue in result.issues.iter().take(SUMMARY_ISSUE_LIMIT) {
            let icon = match issue.severity {
                IssueSeverity::Error => "🔴",
                IssueSeverity::Warning => "🟡",
            };
            report.push_str(&format!(
                "• {} {}: {}\n",
                icon, issue.title, issue.description
            ));
        }

        report.push('\n');
        report.push_str(REVENUE_OPPORTUNITY);
        report.push('\n');
        report.push_str(NEXT_STEP);
        report.push_str(&format!("→ Book a call: {}\n", BOOKING_URL));
        report.push_str("---\n");

        report
    }

    pub fn build_response(result: AnalysisResult) -> AuditResponse {
        let report = Self::render_report(&result);
        AuditResponse { result, report }
    }

    pub fn print_text_report(response: &AuditResponse) {
        let result = &response.result;

        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "Pagescout - Website Audit".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "URL".bright_white().bold(), result.url);
        println!("{}: {}", "Analyzed".bright_white().bold(), result.analyzed_at);

        if let Some(error) = &result.error {
            println!();
            println!("{} {}", "Analysis failed:".bright_red().bold(), error);
            println!();
            println!("{}", "=".repeat(80).bright_blue());
            return;
        }

        println!(
            "{}: {}",
            "Platform".bright_white().bold(),
            result.platform.as_deref().unwrap_or("Unknown")
        );
        println!();

        // Scores
        println!("{}", "Scores".bright_yellow().bold().underline());
        let scores = &result.scores;
        for (label, score) in [
            ("Overall:  ", scores.overall),
            ("SEO:      ", scores.seo),
            ("Tracking: ", scores.tracking),
            ("Technical:", scores.technical),
            ("Meta Ads: ", scores.meta_ads),
        ] {
            println!("  {} {}", label, colorize_score(score));
        }
        println!();

        if !result.issues.is_empty() {
            println!("{}", "Issues".bright_yellow().bold().underline());
            for issue in &result.issues {
                let severity_str = match issue.severity {
                    IssueSeverity::Error => "ERROR".bright_red(),
                    IssueSeverity::Warning => "WARN ".yellow(),
                };
                println!(
                    "  [{}] [{}] {}",
                    severity_str,
                    issue.category.as_str(),
                    issue.title.bright_white()
                );
                println!("          {}", issue.description);
                println!("          {} {}", "Impact:".dimmed(), issue.impact.dimmed());
            }
            println!();
        }

        if !result.opportunities.is_empty() {
            println!("{}", "Opportunities".bright_yellow().bold().underline());
            for opportunity in &result.opportunities {
                println!("  {} {}", "→".bright_green(), opportunity.title.bright_white());
                println!("    {}", opportunity.description);
                println!(
                    "    {} {}",
                    "Potential:".dimmed(),
                    opportunity.potential.bright_green()
                );
            }
            println!();
        }

        println!("{}", "Summary".bright_yellow().bold().underline());
        println!("{}", response.report);
        println!("{}", "=".repeat(80).bright_blue());
    }

    pub fn save_json_report(response: &AuditResponse, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(response)?;
        let mut file = File::create(filename)
            .with_context(|| format!("Failed to create report file: {}", filename))?;
        file.write_all(json.as_bytes())?;
        println!("Report saved to: {}", filename.bright_green());
        Ok(())
    }
}

fn score_or_na(score: Option<u8>) -> String {
    score.map_or_else(|| "N/A".to_string(), |s| s.to_string())
}

fn colorize_score(score: Option<u8>) -> ColoredString {
    match score {
        Some(s) if s >= 80 => s.to_string().bright_green(),
        Some(s) if s >= 50 => s.to_string().yellow(),
        Some(s) => s.to_string().bright_red(),
        None => "N/A".dimmed(),
    }
}
