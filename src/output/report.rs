//! Report views over the aggregated products
//!
//! Two sheets are produced from one run:
//!
//! - `YYYY-MM-DD`: every product, ordered by category
//! - `most-reviewed-YYYY-MM-DD`: products with at least one review, most
//!   reviewed first
//!
//! Column names and order are consumed downstream and must not change.

use crate::catalog::ProductRecord;
use chrono::NaiveDate;

/// Columns of the by-category sheet
pub const BY_CATEGORY_COLUMNS: [&str; 4] = ["id", "description", "category", "price"];

/// Columns of the most-reviewed sheet
pub const MOST_REVIEWED_COLUMNS: [&str; 4] =
    ["id", "description", "number_of_reviews", "stars_from_reviews"];

/// Prefix of the most-reviewed sheet name
pub const MOST_REVIEWED_PREFIX: &str = "most-reviewed-";

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(u32),
    Empty,
}

impl From<Option<u32>> for Cell {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }
}

/// One named sheet: a header row plus data rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    pub name: String,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

/// Both sheets of a run's report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductReport {
    pub by_category: SheetView,
    pub most_reviewed: SheetView,
}

impl ProductReport {
    /// Builds the report for the given records, in aggregation order
    pub fn build(records: &[ProductRecord], run_date: NaiveDate) -> Self {
        let date = run_date.format("%Y-%m-%d").to_string();

        let by_category = SheetView {
            name: date.clone(),
            columns: &BY_CATEGORY_COLUMNS,
            rows: sorted_by_category(records)
                .into_iter()
                .map(|r| {
                    vec![
                        Cell::Text(r.id.clone()),
                        Cell::Text(r.description.clone()),
                        Cell::Text(r.category.clone()),
                        Cell::Text(r.price.clone()),
                    ]
                })
                .collect(),
        };

        let most_reviewed = SheetView {
            name: format!("{}{}", MOST_REVIEWED_PREFIX, date),
            columns: &MOST_REVIEWED_COLUMNS,
            rows: most_reviewed(records)
                .into_iter()
                .map(|r| {
                    vec![
                        Cell::Text(r.id.clone()),
                        Cell::Text(r.description.clone()),
                        Cell::from(r.review_count),
                        Cell::from(r.rating),
                    ]
                })
                .collect(),
        };

        Self {
            by_category,
            most_reviewed,
        }
    }

    pub fn sheets(&self) -> [&SheetView; 2] {
        [&self.by_category, &self.most_reviewed]
    }
}

/// All records, ascending by category; ties keep insertion order
pub fn sorted_by_category(records: &[ProductRecord]) -> Vec<&ProductRecord> {
    let mut sorted: Vec<&ProductRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.category.cmp(&b.category));
    sorted
}

/// Records with a review count above zero, most reviewed first; ties keep
/// insertion order
pub fn most_reviewed(records: &[ProductRecord]) -> Vec<&ProductRecord> {
    let mut reviewed: Vec<&ProductRecord> = records.iter().filter(|r| r.is_reviewed()).collect();
    reviewed.sort_by(|a, b| b.review_count.cmp(&a.review_count));
    reviewed
}
