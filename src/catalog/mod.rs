//! Product catalog for a crawl run
//!
//! # Components
//!
//! - `ProductRecord`: one product as extracted from a category page
//! - `Aggregator`: the deduplicated, insertion-ordered collection of records

mod aggregator;
mod product;

pub use aggregator::{Aggregator, ProductColumns};
pub use product::ProductRecord;
