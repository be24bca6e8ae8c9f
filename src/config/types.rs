use serde::Deserialize;

/// Main configuration structure for Product-Crawler
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub http: HttpConfig,
    pub selectors: SelectorConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Starting URLs, visited in the given order
    pub seeds: Vec<String>,

    /// Also follow the weekly-offer links matched by `selectors.offer-links`
    pub follow_offer_links: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seeds: vec!["https://www.technopolis.bg".to_string()],
            follow_offer_links: false,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Whole-request timeout in seconds; no timeout when absent
    pub request_timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("product-crawler/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: None,
        }
    }
}

/// CSS selectors describing the shop's markup
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SelectorConfig {
    /// Category-list and sub-category-list anchors followed during traversal
    pub category_links: Vec<String>,

    /// Weekly-offer anchors (only followed with `crawler.follow-offer-links`)
    pub offer_links: Vec<String>,

    /// One element per product listing
    pub product_box: String,

    /// Hidden element inside a product box carrying the product attributes
    pub product_metadata: String,

    /// Optional ratings block inside a product box
    pub rating_block: String,

    /// Filled-star indicator inside the ratings block
    pub rating_star: String,

    /// Review-count label inside the ratings block
    pub rating_comment: String,

    /// Regex locating the review count in the label text; the first capture
    /// group is used when there is one, otherwise the whole match
    ///
    /// The default reads the first digit after any leading punctuation, so
    /// `(12 reviews)` counts as 1. Set `(\d+)` to read the whole number.
    pub review_count_pattern: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            category_links: vec![
                "li[class*='Component list-item']>a".to_string(),
                "li[class*='list-sub-item']>a".to_string(),
            ],
            offer_links: vec!["a[href*=weekly-offers]".to_string()],
            product_box: "div[class*='product-box'][data-product-id]".to_string(),
            product_metadata: "div[hidden='true']".to_string(),
            rating_block: "[class='product-rating']".to_string(),
            rating_star: "[class='on']".to_string(),
            rating_comment: "[class='rating-comment']".to_string(),
            review_count_pattern: r"^\W*?\D*?(\d)".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Path to the spreadsheet report
    pub report_path: String,

    /// Optional path for a JSON dump of the product columns
    pub json_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: "product_report.xlsx".to_string(),
            json_path: None,
        }
    }
}
