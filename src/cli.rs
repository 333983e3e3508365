use clap::Parser;

pub const DEFAULT_OUTPUT: &str = "text";
pub const DEFAULT_TIMEOUT: u64 = 15;
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Parser, Debug, Clone)]
#[command(name = "pagescout")]
#[command(about = "A CLI website auditor: SEO, tracking, technical and ad-readiness checks", long_about = None)]
pub struct Cli {
    /// The URL of the page to audit (https:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Save the JSON report to a file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Fetch timeout in seconds (default: 15)
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT)]
    pub timeout: u64,

    /// Run the HTTP API instead of a single audit
    #[arg(long)]
    pub serve: bool,

    /// Address the HTTP API binds to
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
