//! Output module for the crawl report
//!
//! This module handles:
//! - Building the by-category and most-reviewed report views
//! - Writing the views as a two-sheet spreadsheet
//! - Dumping the product columns as JSON
//! - Crawl statistics

mod json;
pub mod report;
pub mod stats;
mod traits;
mod xlsx;

pub use json::write_json_columns;
pub use report::{Cell, ProductReport, SheetView};
pub use stats::{format_statistics, print_statistics, CrawlStats};
pub use traits::{OutputError, OutputResult, ReportWriter};
pub use xlsx::XlsxReportWriter;
