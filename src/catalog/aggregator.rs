//! Deduplicating product collection

use crate::catalog::ProductRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Insertion-ordered collection of unique products, keyed by `ProductRecord::id`
///
/// The first record seen for an identifier wins; later ones are dropped.
/// There is no way to update a record once it is in.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<ProductRecord>,
    seen_ids: HashSet<String>,
}

/// The aggregated products as six parallel columns sharing one row order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductColumns {
    pub id: Vec<String>,
    pub description: Vec<String>,
    pub category: Vec<String>,
    pub price: Vec<String>,
    pub number_of_reviews: Vec<Option<u32>>,
    pub stars_from_reviews: Vec<Option<u32>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record unless its identifier has been seen before
    ///
    /// Returns true if the record was inserted.
    pub fn add(&mut self, record: ProductRecord) -> bool {
        if self.seen_ids.contains(&record.id) {
            tracing::debug!("Skipping duplicate product {}", record.id);
            return false;
        }

        tracing::info!("Adding product: {} to product list", record.description);
        self.seen_ids.insert(record.id.clone());
        self.records.push(record);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen_ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Splits the records into parallel columns
    pub fn to_columns(&self) -> ProductColumns {
        let mut columns = ProductColumns::default();
        for record in &self.records {
            columns.id.push(record.id.clone());
            columns.description.push(record.description.clone());
            columns.category.push(record.category.clone());
            columns.price.push(record.price.clone());
            columns.number_of_reviews.push(record.review_count);
            columns.stars_from_reviews.push(record.rating);
        }
        columns
    }
}
