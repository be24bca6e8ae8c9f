//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The URL frontier driving breadth-first traversal
//! - HTTP fetching
//! - Category link discovery and product extraction
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;
mod parser;
mod selectors;

pub use coordinator::{run_crawl, run_crawl_on, Coordinator, CrawlState};
pub use extractor::{ExtractError, Extracted, Extractor};
pub use fetcher::{build_http_client, fetch_url, Fetch, FetchError, HttpFetcher};
pub use frontier::{EmptyFrontier, Frontier};
pub use parser::{extract_links_simple, resolve_link, LinkDiscoverer};
pub use selectors::{parse_selector, SelectorSet};
