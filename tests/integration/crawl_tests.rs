//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end, from seed URL to CSV file.

use site_sieve::config::{Config, CrawlerConfig};
use site_sieve::crawler::{crawl, Crawler};
use site_sieve::output::{write_csv, TerminationReason};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with no delay
fn create_test_config(max_pages: Option<usize>) -> Config {
    Config {
        crawler: CrawlerConfig {
            delay_seconds: 0.0,
            max_pages,
            request_timeout_seconds: 5,
            ..CrawlerConfig::default()
        },
        ..Config::default()
    }
}

fn html_page(title: &str, body: &str) -> String {
    format!(
        r#"<html><head><title>{}</title><script>var tracking = true;</script></head>
        <body>
            <nav><a href="/nav-only">Navigation</a></nav>
            {}
            <footer>Footer text that should not be captured</footer>
        </body></html>"#,
        title, body
    )
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_host() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            r##"<main>
                <p>Welcome to the home page of the test site with plenty of words.</p>
                <a href="/page1">Page 1</a>
                <a href="page2">Page 2</a>
                <a href="https://external.test/about">Elsewhere</a>
                <a href="#top">Top</a>
                <a href="/logo.PNG">Logo</a>
            </main>"##,
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/page1",
        html_page(
            "Page 1",
            r#"<main><p>The first page talks about something entirely different.</p>
               <a href="/">Home</a></main>"#,
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/page2",
        html_page(
            "Page 2",
            r#"<main><p>The second page has its own long paragraph of unique text.</p></main>"#,
        ),
    )
    .await;

    let report = crawl(&format!("{}/", base_url), &create_test_config(None))
        .await
        .expect("Crawl failed to start");

    let urls: Vec<String> = report
        .records
        .iter()
        .map(|r| r.url().to_string())
        .collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/", base_url),
            format!("{}/page1", base_url),
            format!("{}/page2", base_url),
        ]
    );

    let home = &report.records[0];
    assert_eq!(
        home.internal_links_joined(),
        format!("{0}/page1;{0}/page2", base_url)
    );
    assert_eq!(home.external_links_joined(), "https://external.test/about");
    assert!(home.text().starts_with("Home Welcome to the home page"));
    assert!(!home.text().contains("Footer"));
    assert!(!home.text().contains("tracking"));
    assert!(!home.text().contains("Navigation"));

    // The nav link was never discovered, so it was never requested
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path() != "/nav-only"));
    assert_eq!(requests.len(), 3);

    assert_eq!(
        report.statistics.termination,
        Some(TerminationReason::FrontierExhausted)
    );
}

#[tokio::test]
async fn test_seed_returns_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let report = crawl(&format!("{}/", mock_server.uri()), &create_test_config(None))
        .await
        .expect("Crawl failed to start");

    assert!(report.records.is_empty());
    assert_eq!(report.statistics.pages_visited, 1);
    assert_eq!(report.statistics.fetch_failures, 1);
    assert_eq!(report.statistics.frontier_remaining, 0);
}

#[tokio::test]
async fn test_duplicate_pages_recorded_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Index",
            r#"<p>An index page listing two articles that happen to be mirrors.</p>
               <a href="/article">Article</a>
               <a href="/mirror">Mirror</a>"#,
        ),
    )
    .await;

    let article = html_page(
        "Article",
        "<p>Identical article body served from two different addresses.</p>",
    );
    mount_page(&mock_server, "/article", article.clone()).await;
    mount_page(&mock_server, "/mirror", article).await;

    let report = crawl(&format!("{}/", base_url), &create_test_config(None))
        .await
        .expect("Crawl failed to start");

    assert_eq!(report.records.len(), 2);
    assert_eq!(
        report.records[1].url().as_str(),
        format!("{}/article", base_url)
    );
    assert_eq!(report.statistics.duplicates, 1);
}

#[tokio::test]
async fn test_max_pages_limits_requests() {
    let mock_server = MockServer::start().await;

    let links: String = (0..10)
        .map(|i| format!(r#"<a href="/p{}">p{}</a>"#, i, i))
        .collect();
    mount_page(
        &mock_server,
        "/",
        html_page(
            "Hub",
            &format!("<p>A hub page that links out to many numbered pages.</p>{}", links),
        ),
    )
    .await;

    for i in 0..10 {
        mount_page(
            &mock_server,
            &format!("/p{}", i),
            html_page(
                &format!("P{}", i),
                &format!("<p>Numbered page {} with a sentence long enough to keep.</p>", i),
            ),
        )
        .await;
    }

    let report = crawl(
        &format!("{}/", mock_server.uri()),
        &create_test_config(Some(4)),
    )
    .await
    .expect("Crawl failed to start");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
    assert_eq!(report.statistics.pages_visited, 4);
    assert_eq!(report.records.len(), 4);
    assert_eq!(
        report.statistics.termination,
        Some(TerminationReason::BudgetReached)
    );
}

#[tokio::test]
async fn test_server_errors_do_not_stop_crawl() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            r#"<p>Home page pointing at one broken and one healthy page.</p>
               <a href="/broken">Broken</a>
               <a href="/healthy">Healthy</a>"#,
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/healthy",
        html_page(
            "Healthy",
            r#"<p>The healthy page is reachable and links back to the broken one.</p>
               <a href="/broken">Broken again</a>"#,
        ),
    )
    .await;

    let report = crawl(&format!("{}/", mock_server.uri()), &create_test_config(None))
        .await
        .expect("Crawl failed to start");

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.statistics.fetch_failures, 1);
    // MockServer verifies the `expect(1)` on drop: /broken is never retried
}

#[tokio::test]
async fn test_crawl_to_csv() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Only",
            r#"<p>Only page of the site, with a comma, and "quotes" inside.</p>
               <a href="https://external.test/">Out</a>"#,
        ),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("output.csv");

    let seed = url::Url::parse(&format!("{}/", base_url)).unwrap();
    let config = create_test_config(None);
    let report = Crawler::from_config(seed, &config)
        .expect("Failed to create crawler")
        .run()
        .await;
    write_csv(&csv_path, &report.records).expect("Failed to write CSV");

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("URL,Page Text,Internal Links,External Links")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with(&format!("{}/,\"Only Only page of the site", base_url)));
    assert!(row.ends_with(",,https://external.test/"));
    assert_eq!(lines.next(), None);
}

#[tokio::test]
async fn test_invalid_seed_is_an_error() {
    let result = crawl("not a url", &create_test_config(None)).await;
    assert!(result.is_err());

    let result = crawl("ftp://example.com/", &create_test_config(None)).await;
    assert!(result.is_err());
}
