//! Product record definition

use serde::Serialize;

/// A single product listing extracted from a page
///
/// `review_count` and `rating` are `None` when the listing has no ratings
/// block at all. That is "unknown", which is distinct from zero reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Shop-wide product identifier, the dedup key
    pub id: String,

    pub description: String,

    pub category: String,

    /// Price as printed in the markup; no numeric format is guaranteed
    pub price: String,

    /// Number of customer reviews
    pub review_count: Option<u32>,

    /// Number of filled stars
    pub rating: Option<u32>,
}

impl ProductRecord {
    /// Creates a record without review statistics
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            category: category.into(),
            price: price.into(),
            review_count: None,
            rating: None,
        }
    }

    /// Attaches review statistics
    pub fn with_reviews(mut self, review_count: Option<u32>, rating: Option<u32>) -> Self {
        self.review_count = review_count;
        self.rating = rating;
        self
    }

    /// Returns true if the record has a known, non-zero review count
    pub fn is_reviewed(&self) -> bool {
        self.review_count.is_some_and(|count| count > 0)
    }
}
