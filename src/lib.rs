pub mod audit;
pub mod cli;
pub mod config;
pub mod fetcher;
pub mod http_client;
pub mod meta_ads;
pub mod models;
pub mod opportunities;
pub mod platform;
pub mod reporter;
pub mod scoring;
pub mod seo_analyzer;
pub mod server;
pub mod technical_analyzer;
pub mod tracking_analyzer;

use anyhow::{Context, Result};
use audit::Auditor;
use cli::Cli;
use colored::*;
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use reporter::Reporter;
use std::time::Duration;

/// Applies the config file (explicit or discovered) underneath the CLI arguments
pub fn resolve_args(args: Cli) -> Result<Cli> {
    match Config::load(args.config.as_deref())? {
        Some(config) => Ok(config.merge_with_cli(&args)),
        None => Ok(args),
    }
}

pub async fn run(args: Cli) -> Result<()> {
    let auditor = Auditor::new(args.timeout)?;

    if args.serve {
        return server::serve(&args.bind, auditor).await;
    }

    let url = args
        .url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .context("A URL is required unless --serve is given")?;

    let json_output = args.output == "json";

    if !json_output {
        println!("{}", "Pagescout - Website Audit".bright_cyan().bold());
        println!("{}", "=".repeat(50).bright_blue());
        println!();
        println!("{} {}", "Target:".bright_white().bold(), url);
        println!("{} {}s", "Timeout:".bright_white().bold(), args.timeout);
        println!();
    }

    let spinner = (!json_output).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("[{elapsed_precise}] {spinner:.cyan} {msg}")
                .expect("Progress bar template should be valid"),
        );
        pb.set_message("Fetching and analyzing...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = auditor.analyze(&url).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if args.verbose && !json_output {
        println!("{} {:#?}", "Raw result:".bright_white().bold(), result);
    }

    let response = Reporter::build_response(result);

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&response)?;
            println!("{}", json);
        }
        _ => {
            Reporter::print_text_report(&response);
        }
    }

    if let Some(filename) = &args.save {
        Reporter::save_json_report(&response, filename)?;
    }

    Ok(())
}
