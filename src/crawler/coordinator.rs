//! Crawler coordinator - main crawl orchestration logic
//!
//! The coordinator owns the frontier and the product catalog and drives the
//! crawl one page at a time:
//! - take the next URL off the frontier
//! - fetch it
//! - extract products into the catalog and queue newly found links
//! - mark the URL visited, whatever the fetch outcome
//!
//! When the frontier runs dry the crawl is done and the report is written.

use crate::catalog::Aggregator;
use crate::config::Config;
use crate::crawler::extractor::Extractor;
use crate::crawler::fetcher::{Fetch, HttpFetcher};
use crate::crawler::frontier::{EmptyFrontier, Frontier};
use crate::crawler::parser::LinkDiscoverer;
use crate::crawler::selectors::SelectorSet;
use crate::output::{write_json_columns, CrawlStats, ProductReport, ReportWriter, XlsxReportWriter};
use crate::{ConfigResult, CrawlerError};
use chrono::NaiveDate;
use scraper::Html;
use std::path::Path;

/// Progress is logged every this many pages
const PROGRESS_INTERVAL: u64 = 10;

/// Traversal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    /// URLs are still pending
    Running,

    /// The frontier is exhausted
    Done,
}

/// Main crawler coordinator structure
pub struct Coordinator<F> {
    fetcher: F,
    frontier: Frontier,
    aggregator: Aggregator,
    extractor: Extractor,
    links: LinkDiscoverer,
    state: CrawlState,
    stats: CrawlStats,
}

impl<F: Fetch> Coordinator<F> {
    /// Creates a coordinator seeded from the configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `fetcher` - Fetches page bodies
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(ConfigError)` - A selector or pattern failed to compile
    pub fn new(config: &Config, fetcher: F) -> ConfigResult<Self> {
        let selectors = SelectorSet::compile(&config.selectors)?;

        tracing::info!(
            "Seeding frontier with {} URL(s)",
            config.crawler.seeds.len()
        );

        Ok(Self {
            fetcher,
            frontier: Frontier::with_seeds(config.crawler.seeds.iter().cloned()),
            aggregator: Aggregator::new(),
            extractor: Extractor::new(&selectors),
            links: LinkDiscoverer::new(
                selectors.traversal_links(config.crawler.follow_offer_links),
            ),
            state: CrawlState::Running,
            stats: CrawlStats::default(),
        })
    }

    /// Runs the crawl loop until the frontier is empty
    pub async fn run(&mut self) -> &CrawlStats {
        let start_time = std::time::Instant::now();

        while self.step().await == CrawlState::Running {
            if self.stats.pages_visited % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    "Progress: {} pages crawled, {} in frontier, {} products",
                    self.stats.pages_visited,
                    self.frontier.pending_len(),
                    self.aggregator.len()
                );
            }
        }

        tracing::info!(
            "Crawl completed: {} pages crawled in {:?}",
            self.stats.pages_visited,
            start_time.elapsed()
        );

        &self.stats
    }

    /// Processes the next pending URL, if any
    pub async fn step(&mut self) -> CrawlState {
        let url = match self.frontier.next() {
            Ok(url) => url,
            Err(EmptyFrontier) => {
                if self.state == CrawlState::Running {
                    tracing::info!("Frontier is empty, crawl complete");
                }
                self.state = CrawlState::Done;
                return self.state;
            }
        };

        tracing::info!("Crawling: {}", url);

        match self.fetcher.fetch(&url).await {
            Ok(body) => self.process_page(&url, &body),
            Err(e) => {
                tracing::error!("Failed to crawl: {}: {}", url, e);
                self.stats.pages_failed += 1;
            }
        }

        self.frontier.mark_visited(&url);
        self.stats.pages_visited += 1;

        CrawlState::Running
    }
}

impl<F> Coordinator<F> {
    /// Extracts products and links from a fetched page
    ///
    /// Empty link targets are dropped here; everything else goes to the
    /// frontier as-is.
    pub fn process_page(&mut self, url: &str, html: &str) {
        let document = Html::parse_document(html);

        for extracted in self.extractor.extract(&document) {
            match extracted {
                Ok(record) => {
                    if self.aggregator.add(record) {
                        self.stats.products_added += 1;
                    } else {
                        self.stats.duplicate_products += 1;
                    }
                }
                Err(_) => self.stats.malformed_products += 1,
            }
        }

        for link in self.links.discover(&document, url) {
            if link.is_empty() {
                tracing::debug!("Skipping empty link on {}", url);
                continue;
            }
            if self.frontier.add(&link) {
                self.stats.links_discovered += 1;
            }
        }
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Builds the report views from the products collected so far
    pub fn report(&self, run_date: NaiveDate) -> ProductReport {
        ProductReport::build(self.aggregator.records(), run_date)
    }
}

/// Runs the main crawl operation
///
/// Crawls every reachable category page, then writes the spreadsheet report
/// (and the JSON dump when configured). Page-level failures never abort the
/// run; only client setup and report writing can fail.
///
/// # Example
///
/// ```no_run
/// use product_crawler::config::Config;
/// use product_crawler::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let stats = run_crawl(&Config::default()).await?;
/// println!("{} products", stats.products_added);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<CrawlStats, CrawlerError> {
    let run_date = chrono::Local::now().date_naive();
    run_crawl_on(config, run_date).await
}

/// Like [`run_crawl`], with the report dated `run_date`
pub async fn run_crawl_on(
    config: &Config,
    run_date: NaiveDate,
) -> Result<CrawlStats, CrawlerError> {
    let fetcher = HttpFetcher::from_config(&config.http)?;
    let mut coordinator = Coordinator::new(config, fetcher)?;

    let stats = coordinator.run().await.clone();
    stats.log();

    let report = coordinator.report(run_date);
    XlsxReportWriter::new(&config.output.report_path).write_report(&report)?;

    if let Some(json_path) = &config.output.json_path {
        write_json_columns(&coordinator.aggregator().to_columns(), Path::new(json_path))?;
    }

    Ok(stats)
}
