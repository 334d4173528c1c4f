#![allow(dead_code)]

use repo_stats::cli::{ChartFormat, Cli};
use repo_stats::models::RepositoryRecord;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn record(name: &str, language: Option<&str>, stars: u32) -> RepositoryRecord {
    RepositoryRecord::new(name, None, language.map(str::to_string), stars)
}

/// Listing with a tie on 10 stars, a null language and an unknown field
pub fn sample_listing() -> String {
    r#"[
        {"id": 1, "name": "alpha", "description": "First", "language": "Go", "stargazers_count": 5, "fork": false},
        {"id": 2, "name": "beta", "description": null, "language": "Go", "stargazers_count": 10},
        {"id": 3, "name": "gamma", "description": "Tools, scripts", "language": null, "stargazers_count": 10}
    ]"#
    .to_string()
}

/// Local stand-in for the GitHub API answering one user's listing
pub async fn mock_github(username: &str, status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/users/{}/repos", username)))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;

    server
}

pub fn cli_for(api_url: &str, username: Option<&str>, output_dir: &Path) -> Cli {
    Cli {
        username: username.map(str::to_string),
        api_url: api_url.to_string(),
        output_dir: output_dir.to_path_buf(),
        export: false,
        charts: false,
        non_interactive: true,
        chart_format: ChartFormat::Terminal,
    }
}
