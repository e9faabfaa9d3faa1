//! Integration tests against a real Jira instance.
//!
//! These tests require real credentials and are ignored by default.
//! To run them, create a `.env` file in the jira-lib directory with:
//!
//! ```env
//! JIRA_URL=https://jira.example.com
//! JIRA_USERNAME=user@example.com
//! JIRA_PASSWORD=your-password
//!
//! # A project the account can read
//! JIRA_PROJECT_KEY=DEMO
//! ```
//!
//! Then run: `cargo test -p jira-lib -- --ignored`

use std::env;

use jira_lib::api::query::Jql;
use jira_lib::auth::StaticCredentials;
use jira_lib::JiraClient;

fn load_env() -> Option<(String, String, String)> {
    let _ = dotenvy::dotenv();

    let url = env::var("JIRA_URL").ok()?;
    let username = env::var("JIRA_USERNAME").ok()?;
    let password = env::var("JIRA_PASSWORD").ok()?;

    Some((url, username, password))
}

fn build_client() -> JiraClient {
    let (url, username, password) =
        load_env().expect("Missing required environment variables. See module docs.");
    JiraClient::builder()
        .url(url)
        .credentials(StaticCredentials::basic(username, password))
        .build()
}

#[tokio::test]
#[ignore = "requires real Jira credentials in .env file"]
async fn test_connect() {
    let client = build_client();
    let user = client.connect().await.expect("connect should succeed");
    assert!(user.active);
}

#[tokio::test]
#[ignore = "requires real Jira credentials in .env file"]
async fn test_server_info() {
    let client = build_client();
    let info = client.server_info().await.expect("server info should load");
    assert!(info.version.is_some());
}

#[tokio::test]
#[ignore = "requires real Jira credentials in .env file"]
async fn test_search_first_pages() {
    let client = build_client();
    let project = env::var("JIRA_PROJECT_KEY").unwrap_or_else(|_| "DEMO".to_string());

    let mut pages = client.search(Jql::new().project(project)).page_size(5).pages();
    let mut seen = 0;
    while let Some(page) = pages.next_page().await {
        let page = page.expect("page should load");
        seen += page.len();
        if seen >= 10 {
            break;
        }
    }
    // any result count is fine; the point is that paging terminates
}
