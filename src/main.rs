use anyhow::Result;
use clap::Parser;
use colored::*;
use pagescout::cli::Cli;
use pagescout::{resolve_args, run};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pagescout=debug"
    } else {
        "pagescout=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match resolve_args(Cli::parse()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
            std::process::exit(1);
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
