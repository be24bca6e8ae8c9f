//! Compiled CSS selectors and patterns for the shop's markup

use crate::config::SelectorConfig;
use crate::{ConfigError, ConfigResult};
use regex::Regex;
use scraper::Selector;

/// Parses a single CSS selector, mapping failures to a config error
pub fn parse_selector(selector: &str) -> ConfigResult<Selector> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn parse_all(selectors: &[String]) -> ConfigResult<Vec<Selector>> {
    selectors.iter().map(|s| parse_selector(s)).collect()
}

/// Every selector and pattern the crawler needs, compiled once per run
#[derive(Debug, Clone)]
pub struct SelectorSet {
    pub category_links: Vec<Selector>,
    pub offer_links: Vec<Selector>,
    pub product_box: Selector,
    pub product_metadata: Selector,
    pub rating_block: Selector,
    pub rating_star: Selector,
    pub rating_comment: Selector,
    pub review_count: Regex,
}

impl SelectorSet {
    pub fn compile(config: &SelectorConfig) -> ConfigResult<Self> {
        Ok(Self {
            category_links: parse_all(&config.category_links)?,
            offer_links: parse_all(&config.offer_links)?,
            product_box: parse_selector(&config.product_box)?,
            product_metadata: parse_selector(&config.product_metadata)?,
            rating_block: parse_selector(&config.rating_block)?,
            rating_star: parse_selector(&config.rating_star)?,
            rating_comment: parse_selector(&config.rating_comment)?,
            review_count: Regex::new(&config.review_count_pattern)?,
        })
    }

    /// Selectors whose anchors are followed during traversal
    pub fn traversal_links(&self, follow_offer_links: bool) -> Vec<Selector> {
        let mut selectors = self.category_links.clone();
        if follow_offer_links {
            selectors.extend(self.offer_links.iter().cloned());
        }
        selectors
    }
}
