//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_analyzer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;

use page_analyzer::config::{
    DEFAULT_MAX_CONCURRENT_LINKS, DEFAULT_RETRY_ATTEMPTS, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
use page_analyzer::initialization::init_logger_with;
use page_analyzer::{
    AnalysisMetrics, AnalysisResult, AnalyzerConfig, LogFormat, LogLevel, PageAnalyzer,
};

/// Analyze a web page: HTML version, title, headings, links, login forms.
#[derive(Parser, Debug)]
#[command(name = "page_analyzer", version, about)]
struct Cli {
    /// The URL of the page to analyze
    url: String,

    /// Per-request timeout in seconds (page fetch and each link probe)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_seconds: u64,

    /// Maximum number of link checks in flight simultaneously
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT_LINKS)]
    max_concurrent_links: usize,

    /// Retry attempts for the page fetch and per-link checks
    #[arg(long, default_value_t = DEFAULT_RETRY_ATTEMPTS)]
    retry_attempts: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// Print the result as JSON instead of the human-readable report
    #[arg(long)]
    json: bool,

    /// Print the metrics snapshot after the analysis
    #[arg(long)]
    show_metrics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = AnalyzerConfig {
        timeout: std::time::Duration::from_secs(cli.timeout_seconds),
        max_concurrent_links: cli.max_concurrent_links,
        user_agent: cli.user_agent.clone(),
        retry_attempts: cli.retry_attempts,
        ..Default::default()
    };

    let metrics = Arc::new(AnalysisMetrics::new());
    let sink: Arc<dyn page_analyzer::MetricsSink> = Arc::clone(&metrics) as _;
    let analyzer = PageAnalyzer::new(config, sink).context("Failed to initialize analyzer")?;

    // Ctrl-C cancels the page fetch, every in-flight link probe, and every
    // backoff sleep.
    let cancel = CancellationToken::new();
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupt received, cancelling analysis");
            cancel_for_signal.cancel();
        }
    });

    match analyzer.analyze(&cancel, &cli.url).await {
        Ok(result) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result)
                        .context("Failed to serialize analysis result")?
                );
            } else {
                print_report(&result);
            }
            if cli.show_metrics {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&metrics.snapshot())
                        .context("Failed to serialize metrics snapshot")?
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("page_analyzer error [{}]: {e}", e.code());
            process::exit(1);
        }
    }
}

fn print_report(result: &AnalysisResult) {
    println!("URL:           {}", result.url);
    println!("HTML version:  {}", result.html_version);
    println!(
        "Title:         {}",
        if result.title.is_empty() {
            "(none)"
        } else {
            &result.title
        }
    );

    if result.headings.is_empty() {
        println!("Headings:      (none)");
    } else {
        println!("Headings:      {} total", result.total_headings());
        for (level, count) in &result.headings {
            println!("  {level}: {count}");
        }
    }

    println!(
        "Links:         {} total ({} internal, {} external)",
        result.links.len(),
        result.internal_links(),
        result.external_links()
    );
    println!(
        "Accessibility: {} accessible, {} inaccessible",
        result.accessible_links(),
        result.inaccessible_links()
    );
    println!(
        "Login form:    {}",
        if result.has_login_form { "yes" } else { "no" }
    );
}
