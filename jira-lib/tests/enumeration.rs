//! Search enumeration behavior against a scripted transport.

mod support;

use futures::StreamExt;
use jira_lib::api::query::Jql;
use jira_lib::error::Error;
use support::client_with;
use support::page_body;
use support::ScriptedTransport;

#[tokio::test]
async fn test_enumeration_visits_every_offset() {
    // 5 results at page size 2: offsets 0, 2, 4, with a short final page
    let script = ScriptedTransport::new()
        .respond(200, page_body(0, 2, 5, &["DEMO-1", "DEMO-2"]))
        .respond(200, page_body(2, 2, 5, &["DEMO-3", "DEMO-4"]))
        .respond(200, page_body(4, 2, 5, &["DEMO-5"]));
    let client = client_with(&script);

    let mut pages = client.search(Jql::new().project("DEMO")).page_size(2).pages();
    let mut keys = Vec::new();
    while let Some(page) = pages.next_page().await {
        keys.extend(page.unwrap().issues.into_iter().map(|issue| issue.key));
    }

    assert_eq!(keys, ["DEMO-1", "DEMO-2", "DEMO-3", "DEMO-4", "DEMO-5"]);
    assert!(pages.is_done());

    let requests = script.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests[0].path().contains("jql=project%3DDEMO"));
    assert!(requests[0].path().contains("startAt=0"));
    assert!(requests[1].path().contains("startAt=2"));
    assert!(requests[2].path().contains("startAt=4"));
    assert!(requests.iter().all(|r| r.path().contains("maxResults=2")));
}

#[tokio::test]
async fn test_nothing_is_fetched_before_the_first_pull() {
    let script = ScriptedTransport::new().respond(200, page_body(0, 2, 1, &["DEMO-1"]));
    let client = client_with(&script);

    let mut pages = client.search("project=DEMO").page_size(2).pages();
    assert_eq!(script.request_count(), 0);

    let page = pages.next_page().await.unwrap().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(script.request_count(), 1);
}

#[tokio::test]
async fn test_stream_flattens_pages() {
    let script = ScriptedTransport::new()
        .respond(200, page_body(0, 2, 3, &["DEMO-1", "DEMO-2"]))
        .respond(200, page_body(2, 2, 3, &["DEMO-3"]));
    let client = client_with(&script);

    let issues: Vec<_> = client
        .search("project=DEMO")
        .page_size(2)
        .stream()
        .map(|issue| issue.unwrap().key)
        .collect()
        .await;

    assert_eq!(issues, ["DEMO-1", "DEMO-2", "DEMO-3"]);
}

#[tokio::test]
async fn test_empty_result_set_ends_after_one_page() {
    let script = ScriptedTransport::new().respond(200, page_body(0, 50, 0, &[]));
    let client = client_with(&script);

    let issues = client.search("project=EMPTY").all().await.unwrap();
    assert!(issues.is_empty());
    assert_eq!(script.request_count(), 1);
}

#[tokio::test]
async fn test_stall_is_an_error_not_a_loop() {
    // the server claims 5 results but hands out none
    let script = ScriptedTransport::new().respond(200, page_body(0, 2, 5, &[]));
    let client = client_with(&script);

    let mut pages = client.search("project=DEMO").page_size(2).pages();
    let err = pages.next_page().await.unwrap().unwrap_err();
    assert!(matches!(err, Error::Stalled { start_at: 0, total: 5 }));

    // the enumerator is poisoned; no further fetches happen
    assert!(pages.is_done());
    assert!(pages.next_page().await.is_none());
    assert_eq!(script.request_count(), 1);
}

#[tokio::test]
async fn test_mid_stream_error_poisons_the_enumerator() {
    let script = ScriptedTransport::new()
        .respond(200, page_body(0, 2, 5, &["DEMO-1", "DEMO-2"]))
        .respond(500, r#"{"errorMessages":["Internal server error"],"errors":{}}"#);
    let client = client_with(&script);

    let mut pages = client.search("project=DEMO").page_size(2).pages();
    pages.next_page().await.unwrap().unwrap();

    let err = pages.next_page().await.unwrap().unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.status_code(), Some(500));

    assert!(pages.next_page().await.is_none());
    assert_eq!(script.request_count(), 2);
}

#[tokio::test]
async fn test_restart_is_a_new_search_with_an_offset() {
    let script = ScriptedTransport::new().respond(200, page_body(3, 2, 5, &["DEMO-4", "DEMO-5"]));
    let client = client_with(&script);

    let mut pages = client.search("project=DEMO").page_size(2).start_at(3).pages();
    assert_eq!(pages.start_at(), 3);
    pages.next_page().await.unwrap().unwrap();

    assert!(script.requests()[0].path().contains("startAt=3"));
}

#[tokio::test]
async fn test_total_drift_is_reread_from_every_page() {
    // the result set shrinks from 5 to 3 while paging
    let script = ScriptedTransport::new()
        .respond(200, page_body(0, 2, 5, &["DEMO-1", "DEMO-2"]))
        .respond(200, page_body(2, 2, 3, &["DEMO-3"]));
    let client = client_with(&script);

    let issues = client.search("project=DEMO").page_size(2).all().await.unwrap();
    assert_eq!(issues.len(), 3);
    assert_eq!(script.request_count(), 2);
}

#[tokio::test]
async fn test_field_selection_is_forwarded() {
    let script = ScriptedTransport::new().respond(200, page_body(0, 50, 0, &[]));
    let client = client_with(&script);

    client
        .search("project=DEMO")
        .fields(["summary", "status"])
        .all()
        .await
        .unwrap();

    assert!(script.requests()[0].path().contains("&fields=summary,status"));
}

#[tokio::test]
async fn test_search_issues_come_back_with_normalized_links() {
    let body = serde_json::json!({
        "startAt": 0,
        "maxResults": 50,
        "total": 1,
        "issues": [{
            "id": "10000",
            "key": "DEMO-1",
            "fields": {
                "summary": "blocked work",
                "issuelinks": [{
                    "id": "30000",
                    "type": { "name": "Blocks" },
                    "outwardIssue": { "id": "10001", "key": "DEMO-2" }
                }]
            }
        }]
    })
    .to_string();
    let script = ScriptedTransport::new().respond(200, body);
    let client = client_with(&script);

    let issues = client.search("key=DEMO-1").all().await.unwrap();
    let link = &issues[0].fields.links[0];
    assert_eq!(link.inward.id, "10000");
    assert_eq!(link.inward.key, "DEMO-1");
    assert_eq!(link.outward.key, "DEMO-2");
}
