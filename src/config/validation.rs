use crate::config::types::{Config, CrawlerConfig, HttpConfig, OutputConfig, SelectorConfig};
use crate::crawler::parse_selector;
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_http_config(&config.http)?;
    validate_selector_config(&config.selectors)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed URL is required".to_string(),
        ));
    }

    for seed in &config.seeds {
        let url = Url::parse(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Seed URL '{}' must use http or https",
                seed
            )));
        }
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "request_timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every selector compiles
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    if config.category_links.is_empty() {
        return Err(ConfigError::Validation(
            "category_links needs at least one selector".to_string(),
        ));
    }

    let singles = [
        &config.product_box,
        &config.product_metadata,
        &config.rating_block,
        &config.rating_star,
        &config.rating_comment,
    ];

    for selector in config
        .category_links
        .iter()
        .chain(config.offer_links.iter())
        .chain(singles)
    {
        parse_selector(selector)?;
    }

    Regex::new(&config.review_count_pattern)?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.report_path.is_empty() {
        return Err(ConfigError::Validation(
            "report_path cannot be empty".to_string(),
        ));
    }

    if matches!(&config.json_path, Some(path) if path.is_empty()) {
        return Err(ConfigError::Validation(
            "json_path cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_seeds() {
        let mut config = Config::default();
        config.crawler.seeds = vec![];
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));

        config.crawler.seeds = vec!["not a url".to_string()];
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));

        config.crawler.seeds = vec!["ftp://example.com/".to_string()];
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));

        config.crawler.seeds = vec!["http://127.0.0.1:8080/".to_string()];
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_selectors() {
        let mut config = Config::default();
        config.selectors.product_box = "div[".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSelector { .. })
        ));

        let mut config = Config::default();
        config.selectors.offer_links = vec![">>>".to_string()];
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.selectors.category_links.clear();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.selectors.review_count_pattern = "(\\d+".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_validate_http_and_output() {
        let mut config = Config::default();
        config.http.request_timeout_secs = Some(0);
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.output.report_path = String::new();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.output.json_path = Some(String::new());
        assert!(validate(&config).is_err());
    }
}
