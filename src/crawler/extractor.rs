//! Product extraction from category pages
//!
//! Each product box on a page carries a hidden metadata element whose
//! attributes hold the product fields, plus an optional ratings block.
//! Extraction is per box: a malformed box produces an [`ExtractError`] and
//! the remaining boxes are still processed.

use crate::catalog::ProductRecord;
use crate::crawler::SelectorSet;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

const ID_ATTR: &str = "data-productid";
const NAME_ATTR: &str = "data-productname";
const CATEGORY_ATTR: &str = "data-productcategory";
const PRICE_ATTR: &str = "data-productprice";

/// Longest markup excerpt carried by an [`ExtractError`]
const SNIPPET_LEN: usize = 200;

/// Why a single product box could not be turned into a record
///
/// Every variant carries an excerpt of the offending element's markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no product metadata element in {snippet}")]
    MissingMetadata { snippet: String },

    #[error("product metadata lacks the {attribute} attribute in {snippet}")]
    MissingAttribute {
        attribute: &'static str,
        snippet: String,
    },

    #[error("rating block has no filled star in {snippet}")]
    MissingStars { snippet: String },

    #[error("star count '{text}' is not an integer in {snippet}")]
    InvalidStars { text: String, snippet: String },

    #[error("rating block has no review-count label in {snippet}")]
    MissingReviewLabel { snippet: String },
}

/// Outcome of one extraction attempt
pub type Extracted = Result<ProductRecord, ExtractError>;

/// Turns product boxes into [`ProductRecord`]s
#[derive(Debug, Clone)]
pub struct Extractor {
    product_box: Selector,
    product_metadata: Selector,
    rating_block: Selector,
    rating_star: Selector,
    rating_comment: Selector,
    review_count: Regex,
}

impl Extractor {
    pub fn new(selectors: &SelectorSet) -> Self {
        Self {
            product_box: selectors.product_box.clone(),
            product_metadata: selectors.product_metadata.clone(),
            rating_block: selectors.rating_block.clone(),
            rating_star: selectors.rating_star.clone(),
            rating_comment: selectors.rating_comment.clone(),
            review_count: selectors.review_count.clone(),
        }
    }

    /// Lazily yields one result per product box in document order
    ///
    /// Failed boxes are logged and yielded as `Err`, so callers can tell a
    /// skipped box apart from the end of the page.
    pub fn extract<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = Extracted> + 'a {
        document
            .select(&self.product_box)
            .map(move |product_box| {
                let result = self.extract_product(product_box);
                if let Err(e) = &result {
                    tracing::warn!("The selected element is not a valid product element: {}", e);
                }
                result
            })
    }

    /// Extracts a single product box
    pub fn extract_product(&self, product_box: ElementRef<'_>) -> Extracted {
        let metadata = product_box
            .select(&self.product_metadata)
            .next()
            .ok_or_else(|| ExtractError::MissingMetadata {
                snippet: snippet(product_box),
            })?;

        let attrs = metadata.value();
        let id = attrs
            .attr(ID_ATTR)
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ExtractError::MissingAttribute {
                attribute: ID_ATTR,
                snippet: snippet(product_box),
            })?;

        let record = ProductRecord::new(
            id.trim(),
            attrs.attr(NAME_ATTR).unwrap_or_default(),
            attrs.attr(CATEGORY_ATTR).unwrap_or_default(),
            attrs.attr(PRICE_ATTR).unwrap_or_default(),
        );

        match product_box.select(&self.rating_block).next() {
            Some(rating) => {
                let (review_count, stars) = self.extract_rating(rating)?;
                Ok(record.with_reviews(review_count, Some(stars)))
            }
            None => Ok(record),
        }
    }

    /// Reads the review count and star count of a ratings block
    fn extract_rating(&self, rating: ElementRef<'_>) -> Result<(Option<u32>, u32), ExtractError> {
        let star = rating
            .select(&self.rating_star)
            .last()
            .ok_or_else(|| ExtractError::MissingStars {
                snippet: snippet(rating),
            })?;

        let star_text = element_text(star);
        let stars = star_text
            .parse::<u32>()
            .map_err(|_| ExtractError::InvalidStars {
                text: star_text.clone(),
                snippet: snippet(rating),
            })?;

        let label = rating
            .select(&self.rating_comment)
            .next()
            .ok_or_else(|| ExtractError::MissingReviewLabel {
                snippet: snippet(rating),
            })?;

        Ok((self.parse_review_count(&element_text(label)), stars))
    }

    /// Finds the review count in free label text such as `(3 reviews)`
    ///
    /// Text without a digit gives `None`: the count is unknown.
    pub fn parse_review_count(&self, text: &str) -> Option<u32> {
        let captures = self.review_count.captures(text)?;
        let digits = captures.get(1).or_else(|| captures.get(0))?;
        digits.as_str().parse().ok()
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn snippet(element: ElementRef<'_>) -> String {
    let html = element.html();
    if html.chars().count() <= SNIPPET_LEN {
        return html;
    }
    let mut cut: String = html.chars().take(SNIPPET_LEN).collect();
    cut.push_str("...");
    cut
}
