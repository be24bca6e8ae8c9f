//! Crawl statistics
//!
//! Counters collected by the coordinator over a run, and a plain-text
//! rendering for the command line.

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// URLs taken off the frontier, fetched or not
    pub pages_visited: u64,

    /// URLs whose fetch failed
    pub pages_failed: u64,

    /// Products added to the catalog
    pub products_added: u64,

    /// Products dropped because their identifier was already known
    pub duplicate_products: u64,

    /// Product boxes skipped as malformed
    pub malformed_products: u64,

    /// Links that were new to the frontier
    pub links_discovered: u64,
}

impl CrawlStats {
    /// URLs fetched successfully
    pub fn pages_fetched(&self) -> u64 {
        self.pages_visited - self.pages_failed
    }

    /// Logs the statistics at info level
    pub fn log(&self) {
        tracing::info!(
            "Crawl finished: {} pages visited ({} failed), {} products added, {} duplicates, {} malformed, {} links queued",
            self.pages_visited,
            self.pages_failed,
            self.products_added,
            self.duplicate_products,
            self.malformed_products,
            self.links_discovered
        );
    }
}

/// Formats statistics for terminal output
pub fn format_statistics(stats: &CrawlStats) -> String {
    let mut out = String::new();
    out.push_str("=== Crawl Statistics ===\n\n");
    out.push_str(&format!("Pages visited:        {}\n", stats.pages_visited));
    out.push_str(&format!("  fetched:            {}\n", stats.pages_fetched()));
    out.push_str(&format!("  failed:             {}\n", stats.pages_failed));
    out.push_str(&format!("Products added:       {}\n", stats.products_added));
    out.push_str(&format!("Duplicates dropped:   {}\n", stats.duplicate_products));
    out.push_str(&format!("Malformed skipped:    {}\n", stats.malformed_products));
    out.push_str(&format!("Links queued:         {}\n", stats.links_discovered));
    out
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &CrawlStats) {
    print!("{}", format_statistics(stats));
}
