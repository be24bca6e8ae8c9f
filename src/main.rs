//! Product-Crawler main entry point
//!
//! This is the command-line interface for the Product-Crawler category crawler.

use anyhow::Context;
use clap::Parser;
use product_crawler::config::{load_config_with_hash, Config};
use product_crawler::crawler::run_crawl;
use product_crawler::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Product-Crawler: crawls a shop's category pages into a product report
///
/// Without a configuration file the stock crawl runs: it starts from the
/// default seed and writes `product_report.xlsx` to the current directory.
#[derive(Parser, Debug)]
#[command(name = "product-crawler")]
#[command(version)]
#[command(about = "Crawls a shop's category pages into a product report", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    tracing::info!("Seed URLs: {}", config.crawler.seeds.len());

    let stats = run_crawl(&config).await.context("crawl failed")?;

    if !cli.quiet {
        print_statistics(&stats);
        println!("\n✓ Report written to: {}", config.output.report_path);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("product_crawler=info,warn"),
            1 => EnvFilter::new("product_crawler=debug,info"),
            2 => EnvFilter::new("product_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
