//! Integration tests for the extraction pipeline
//!
//! These tests use wiremock to serve pages from a mock HTTP server and run
//! the full fetch, extract, write cycle end-to-end.

use std::path::Path;
use table_harvest::config::{Config, OutputConfig, SourceConfig, DEFAULT_TABLE_CLASS};
use table_harvest::{run_pipeline, AlignmentPolicy, FailureKind, HarvestError, TableSelector};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REVENUE_PAGE: &str = r#"<html><head><title>Largest companies</title></head><body>
    <table class="box-Update"><tr><td>This article needs to be updated.</td></tr></table>
    <table class="wikitable sortable">
        <tbody>
            <tr><th>Rank</th><th>Name</th><th>Revenue</th></tr>
            <tr><td>1</td><td>Acme</td><td>100</td></tr>
            <tr><td>2</td><td>Globex</td><td>90</td></tr>
        </tbody>
    </table>
    </body></html>"#;

/// Creates a test configuration pointing at the mock server
fn create_test_config(url: String, selector: TableSelector, output: &Path) -> Config {
    Config {
        source: SourceConfig {
            url,
            user_agent: Some("TestHarvester/1.0".to_string()),
            timeout_secs: Some(10),
        },
        table: selector,
        output: OutputConfig {
            path: output.to_string_lossy().into_owned(),
            delimiter: ',',
            alignment: AlignmentPolicy::Positional,
        },
    }
}

async fn serve(body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/companies"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1..)
        .mount(&mock_server)
        .await;
    mock_server
}

fn page_url(server: &MockServer) -> String {
    format!("{}/wiki/companies", server.uri())
}

#[tokio::test]
async fn test_revenue_table_by_index() {
    let mock_server = serve(REVENUE_PAGE).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("largest_companies.csv");

    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Index { index: 1 },
        &output,
    );
    let summary = run_pipeline(config).await.expect("Run failed");

    let written = std::fs::read_to_string(&output).expect("Output missing");
    assert_eq!(written, "Rank,Name,Revenue\n1,Acme,100\n2,Globex,90\n");

    assert_eq!(summary.columns, 3);
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.misaligned_rows, 0);
    assert_eq!(summary.bytes_fetched, REVENUE_PAGE.len());
    assert!(summary.preview.contains("| 2 | Globex | 90 |"));
}

#[tokio::test]
async fn test_revenue_table_by_class() {
    let mock_server = serve(REVENUE_PAGE).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("largest_companies.csv");

    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Class {
            class: DEFAULT_TABLE_CLASS.to_string(),
        },
        &output,
    );
    run_pipeline(config).await.expect("Run failed");

    let written = std::fs::read_to_string(&output).expect("Output missing");
    assert_eq!(written, "Rank,Name,Revenue\n1,Acme,100\n2,Globex,90\n");
}

#[tokio::test]
async fn test_missing_class_aborts_before_writing() {
    let mock_server = serve(
        r#"<html><body><table class="wikitable"><tr><th>A</th></tr></table></body></html>"#,
    )
    .await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("never.csv");

    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Class {
            class: "wikitable sortable".to_string(),
        },
        &output,
    );
    let err = run_pipeline(config).await.unwrap_err();

    assert!(matches!(err, HarvestError::TableNotFound { .. }));
    assert_eq!(err.kind(), FailureKind::NotFound);
    assert!(!output.exists(), "No output file should be written");
}

#[tokio::test]
async fn test_header_only_table_writes_one_line() {
    let mock_server = serve(
        r#"<html><body><table><tr><th>Rank</th><th>Name</th></tr></table></body></html>"#,
    )
    .await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("header_only.csv");

    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Index { index: 0 },
        &output,
    );
    let summary = run_pipeline(config).await.expect("Run failed");

    assert_eq!(summary.rows, 0);
    assert_eq!(
        std::fs::read_to_string(&output).expect("Output missing"),
        "Rank,Name\n"
    );
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let mock_server = serve(REVENUE_PAGE).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("largest_companies.csv");
    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Index { index: 1 },
        &output,
    );

    run_pipeline(config.clone()).await.expect("First run failed");
    let first = std::fs::read(&output).expect("Output missing");

    run_pipeline(config).await.expect("Second run failed");
    let second = std::fs::read(&output).expect("Output missing");

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_ragged_rows_by_policy() {
    let page = r#"<html><body><table>
        <tr><th>Rank</th><th>Name</th><th>Revenue</th></tr>
        <tr><td>1</td><td>Acme</td><td>100</td></tr>
        <tr><td>2</td><td>Globex</td></tr>
    </table></body></html>"#;
    let mock_server = serve(page).await;
    let dir = TempDir::new().expect("Failed to create temp dir");

    // Positional: short row is written with an empty trailing field
    let positional = dir.path().join("positional.csv");
    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Index { index: 0 },
        &positional,
    );
    let summary = run_pipeline(config).await.expect("Run failed");
    assert_eq!(summary.misaligned_rows, 1);
    assert_eq!(
        std::fs::read_to_string(&positional).expect("Output missing"),
        "Rank,Name,Revenue\n1,Acme,100\n2,Globex,\n"
    );

    // Strict: the run aborts and nothing is written
    let strict = dir.path().join("strict.csv");
    let mut config = create_test_config(
        page_url(&mock_server),
        TableSelector::Index { index: 0 },
        &strict,
    );
    config.output.alignment = AlignmentPolicy::Strict;
    let err = run_pipeline(config).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Alignment);
    assert!(!strict.exists());
}

#[tokio::test]
async fn test_tab_delimited_round_trip() {
    let page = r#"<html><body><table>
        <tr><th>Name</th><th>Headquarters</th></tr>
        <tr><td>Walmart</td><td>Bentonville, Arkansas</td></tr>
        <tr><td>Amazon</td><td>Seattle, Washington</td></tr>
    </table></body></html>"#;
    let mock_server = serve(page).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("companies.tsv");

    let mut config = create_test_config(
        page_url(&mock_server),
        TableSelector::Index { index: 0 },
        &output,
    );
    config.output.delimiter = '\t';
    run_pipeline(config).await.expect("Run failed");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(&output)
        .expect("Failed to open output");
    let headers: Vec<String> = reader
        .headers()
        .expect("Missing header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| {
            record
                .expect("Bad record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();

    assert_eq!(headers, vec!["Name", "Headquarters"]);
    assert_eq!(
        rows,
        vec![
            vec!["Walmart", "Bentonville, Arkansas"],
            vec!["Amazon", "Seattle, Washington"],
        ]
    );
}

#[tokio::test]
async fn test_http_error_status_aborts() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/companies"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("never.csv");

    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Index { index: 1 },
        &output,
    );
    let err = run_pipeline(config).await.unwrap_err();

    assert!(matches!(err, HarvestError::HttpStatus { status: 404, .. }));
    assert_eq!(err.kind(), FailureKind::Network);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
    // Nothing listens on port 1
    let url = "http://127.0.0.1:1/wiki/companies".to_string();
    let dir = TempDir::new().expect("Failed to create temp dir");

    let config = create_test_config(
        url,
        TableSelector::Index { index: 1 },
        &dir.path().join("never.csv"),
    );
    let err = run_pipeline(config).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Network);
}

#[tokio::test]
async fn test_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/companies"))
        .and(header("user-agent", "TestHarvester/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REVENUE_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;
    let dir = TempDir::new().expect("Failed to create temp dir");

    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Index { index: 1 },
        &dir.path().join("out.csv"),
    );
    run_pipeline(config).await.expect("Run failed");
    // Wiremock verifies expect(1) when the mock server drops
}

#[tokio::test]
async fn test_unwritable_destination_is_write_failure() {
    let mock_server = serve(REVENUE_PAGE).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("no_such_dir").join("out.csv");

    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Index { index: 1 },
        &output,
    );
    let err = run_pipeline(config).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Write);
}

#[tokio::test]
async fn test_class_filter_skips_table_with_extra_classes() {
    let page = r#"<html><body>
        <table class="wikitable sortable mw-collapsible"><tr><th>Sidebar</th></tr><tr><td>x</td></tr></table>
        <table class="wikitable sortable">
            <tr><th>Rank</th><th>Name</th><th>Revenue</th></tr>
            <tr><td>1</td><td>Acme</td><td>100</td></tr>
        </table>
    </body></html>"#;
    let mock_server = serve(page).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("largest_companies.csv");

    let config = create_test_config(
        page_url(&mock_server),
        TableSelector::Class {
            class: DEFAULT_TABLE_CLASS.to_string(),
        },
        &output,
    );
    run_pipeline(config).await.expect("Run failed");

    assert_eq!(
        std::fs::read_to_string(&output).expect("Output missing"),
        "Rank,Name,Revenue\n1,Acme,100\n"
    );
}
