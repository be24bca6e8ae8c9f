//! Category link discovery
//!
//! Finds the anchors that lead to further category pages. Only root-relative
//! targets (starting with `/`) are resolved against the page URL; everything
//! else, including empty or missing targets, is passed through untouched.

use scraper::{Html, Selector};
use url::Url;

/// Selects outbound category links from a parsed page
#[derive(Debug, Clone)]
pub struct LinkDiscoverer {
    selectors: Vec<Selector>,
}

impl LinkDiscoverer {
    /// Creates a discoverer matching anchors against each selector in turn
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    /// Lazily yields the link target of every matched anchor
    ///
    /// Links are produced selector by selector, in document order within each
    /// selector. A missing `href` is yielded as an empty string.
    ///
    /// # Example
    ///
    /// ```
    /// use product_crawler::crawler::{parse_selector, LinkDiscoverer};
    /// use scraper::Html;
    ///
    /// let html = Html::parse_document(r#"<ul><li class="cat"><a href="/tv">TV</a></li></ul>"#);
    /// let discoverer = LinkDiscoverer::new(vec![parse_selector("li.cat > a").unwrap()]);
    /// let links: Vec<String> = discoverer.discover(&html, "https://example.com/").collect();
    /// assert_eq!(links, vec!["https://example.com/tv"]);
    /// ```
    pub fn discover<'a>(
        &'a self,
        document: &'a Html,
        base_url: &str,
    ) -> impl Iterator<Item = String> + 'a {
        let base = Url::parse(base_url).ok();

        self.selectors
            .iter()
            .flat_map(move |selector| document.select(selector))
            .map(move |anchor| {
                let href = anchor.value().attr("href").unwrap_or_default();
                resolve_link(href, base.as_ref())
            })
    }
}

/// Resolves a root-relative path against the base URL
///
/// Anything not starting with `/`, or any path the base cannot absorb,
/// comes back unchanged.
pub fn resolve_link(href: &str, base_url: Option<&Url>) -> String {
    if !href.starts_with('/') {
        return href.to_string();
    }

    match base_url.map(|base| base.join(href)) {
        Some(Ok(absolute_url)) => absolute_url.to_string(),
        _ => href.to_string(),
    }
}

/// Convenience function for collecting the links of raw markup
pub fn extract_links_simple(html: &str, base_url: &str, selectors: Vec<Selector>) -> Vec<String> {
    let document = Html::parse_document(html);
    LinkDiscoverer::new(selectors)
        .discover(&document, base_url)
        .collect()
}
