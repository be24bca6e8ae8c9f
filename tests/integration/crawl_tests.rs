//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use chrono::NaiveDate;
use product_crawler::config::Config;
use product_crawler::crawler::{run_crawl_on, Coordinator, CrawlState, HttpFetcher};
use std::io::Read;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration seeded at `seed`, writing into `dir`
fn create_test_config(seed: &str, dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.crawler.seeds = vec![seed.to_string()];
    config.http.user_agent = "TestBot/1.0".to_string();
    config.http.request_timeout_secs = Some(5);
    config.output.report_path = dir
        .path()
        .join("product_report.xlsx")
        .to_string_lossy()
        .into_owned();
    config
}

fn category_link(href: &str) -> String {
    format!(r#"<li class="Component list-item"><a href="{href}">Category</a></li>"#)
}

fn sub_category_link(href: &str) -> String {
    format!(r#"<li class="list-sub-item"><a href="{href}">Sub-category</a></li>"#)
}

fn product(id: &str, name: &str, category: &str, price: &str) -> String {
    format!(
        r#"<div class="product-box" data-product-id="{id}">
            <div hidden="true" data-productid="{id}" data-productname="{name}"
                 data-productcategory="{category}" data-productprice="{price}"></div>
            <span class="price">{price}</span>
        </div>"#
    )
}

fn rated_product(id: &str, name: &str, category: &str, stars: u32, label: &str) -> String {
    let mut spans = String::new();
    for n in 1..=5 {
        let class = if n <= stars { "on" } else { "off" };
        spans.push_str(&format!(r#"<span class="{class}">{n}</span>"#));
    }
    format!(
        r#"<div class="product-box" data-product-id="{id}">
            <div hidden="true" data-productid="{id}" data-productname="{name}"
                 data-productcategory="{category}" data-productprice="10.00"></div>
            <div class="product-rating">{spans}<span class="rating-comment">{label}</span></div>
        </div>"#
    )
}

fn page(parts: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Shop</title></head><body>{}</body></html>",
        parts.concat()
    )
}

/// Reads one XML part out of the written workbook
fn workbook_part(path: &str, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut xml = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
    xml
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        page(&[
            category_link("/phones"),
            category_link("/tv"),
            product("1", "Kettle", "Kitchen", "49.99"),
        ]),
    )
    .await;
    mount_page(
        &mock_server,
        "/phones",
        page(&[
            sub_category_link("/phones/smart"),
            category_link("/"),
            rated_product("2", "Phone X", "Phones", 4, "(12 reviews)"),
        ]),
    )
    .await;
    mount_page(
        &mock_server,
        "/tv",
        page(&[
            category_link("/phones"),
            product("1", "Kettle again", "Kitchen", "39.99"),
            rated_product("3", "TV 55", "TV", 5, "(3 reviews)"),
        ]),
    )
    .await;
    mount_page(
        &mock_server,
        "/phones/smart",
        page(&[rated_product("4", "Phone Y", "Phones", 2, "no reviews yet")]),
    )
    .await;

    let config = create_test_config(&format!("{}/", base_url), &dir);
    let fetcher = HttpFetcher::from_config(&config.http).unwrap();
    let mut coordinator = Coordinator::new(&config, fetcher).unwrap();

    let stats = coordinator.run().await.clone();

    assert_eq!(coordinator.state(), CrawlState::Done);
    assert_eq!(stats.pages_visited, 4);
    assert_eq!(stats.pages_failed, 0);
    assert_eq!(stats.products_added, 4);
    assert_eq!(stats.duplicate_products, 1);

    let records = coordinator.aggregator().records();
    let kettle = records.iter().find(|r| r.id == "1").unwrap();
    assert_eq!(kettle.description, "Kettle");
    assert_eq!(kettle.price, "49.99");
    assert_eq!(kettle.review_count, None);

    let phone = records.iter().find(|r| r.id == "2").unwrap();
    // only the first digit of the label counts
    assert_eq!(phone.review_count, Some(1));
    assert_eq!(phone.rating, Some(4));

    let phone_y = records.iter().find(|r| r.id == "4").unwrap();
    assert_eq!(phone_y.review_count, None);
    assert_eq!(phone_y.rating, Some(2));

    let report = coordinator.report(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    assert_eq!(report.by_category.name, "2024-05-01");
    assert_eq!(report.most_reviewed.name, "most-reviewed-2024-05-01");
    assert_eq!(report.by_category.rows.len(), 4);
    assert_eq!(report.most_reviewed.rows.len(), 2);
}

#[tokio::test]
async fn test_crawl_survives_http_errors() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        page(&[
            category_link("/broken"),
            category_link("/gone"),
            category_link("/ok"),
        ]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/ok",
        page(&[
            category_link("/broken"),
            product("1", "Radio", "Audio", "20.00"),
        ]),
    )
    .await;

    let config = create_test_config(&format!("{}/", base_url), &dir);
    let fetcher = HttpFetcher::from_config(&config.http).unwrap();
    let mut coordinator = Coordinator::new(&config, fetcher).unwrap();

    let stats = coordinator.run().await.clone();

    assert_eq!(stats.pages_visited, 4);
    assert_eq!(stats.pages_failed, 2);
    assert_eq!(stats.products_added, 1);
    assert!(coordinator
        .frontier()
        .is_visited(&format!("{}/broken", base_url)));
}

#[tokio::test]
async fn test_run_crawl_writes_report() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        page(&[
            product("1", "Kettle", "Kitchen", "49.99"),
            rated_product("2", "Phone X", "Phones", 4, "(7)"),
            r#"<div class="product-box" data-product-id="3"><p>broken</p></div>"#.to_string(),
        ]),
    )
    .await;

    let mut config = create_test_config(&format!("{}/", base_url), &dir);
    let json_path = dir.path().join("products.json");
    config.output.json_path = Some(json_path.to_string_lossy().into_owned());

    let stats = run_crawl_on(&config, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        .await
        .unwrap();

    assert_eq!(stats.pages_visited, 1);
    assert_eq!(stats.products_added, 2);
    assert_eq!(stats.malformed_products, 1);

    let workbook = workbook_part(&config.output.report_path, "xl/workbook.xml");
    assert!(workbook.contains(r#"<sheet name="2024-05-01""#));
    assert!(workbook.contains(r#"<sheet name="most-reviewed-2024-05-01""#));

    let strings = workbook_part(&config.output.report_path, "xl/sharedStrings.xml");
    let headers = [
        "id",
        "description",
        "category",
        "price",
        "number_of_reviews",
        "stars_from_reviews",
    ];
    for header in headers {
        assert!(strings.contains(&format!("<t>{}</t>", header)), "missing {}", header);
    }

    // only the phone is reviewed: 7 reviews, 4 stars
    let most_reviewed = workbook_part(&config.output.report_path, "xl/worksheets/sheet2.xml");
    assert!(most_reviewed.contains(r#"<c r="C2"><v>7</v></c>"#));
    assert!(most_reviewed.contains(r#"<c r="D2"><v>4</v></c>"#));
    assert!(!most_reviewed.contains(r#"r="A3""#));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["id"], serde_json::json!(["1", "2"]));
    assert_eq!(json["number_of_reviews"], serde_json::json!([null, 7]));
}

#[tokio::test]
async fn test_run_crawl_with_unreachable_seed_still_reports() {
    let dir = TempDir::new().unwrap();
    // nothing listens on the discard port
    let config = create_test_config("http://127.0.0.1:9/", &dir);

    let stats = run_crawl_on(&config, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        .await
        .unwrap();

    assert_eq!(stats.pages_visited, 1);
    assert_eq!(stats.pages_failed, 1);
    assert!(std::path::Path::new(&config.output.report_path).exists());
}
