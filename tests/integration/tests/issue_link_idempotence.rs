use std::path::PathBuf;

use httpmock::prelude::*;
use prlink_action::{run_pr_issue_link, PrIssueLinkConfig, PrIssueLinkOutcome};
use prlink_core::{create_issue_link, issue_id_from_head_label};
use prlink_github::GithubApiClientConfig;
use serde_json::json;
use tempfile::tempdir;

fn pipeline_config(base_url: &str, event_path: PathBuf) -> PrIssueLinkConfig {
    PrIssueLinkConfig {
        github: GithubApiClientConfig {
            api_base: base_url.to_string(),
            token: "integration-token".to_string(),
            request_timeout_ms: 2_000,
            retry_max_attempts: 1,
            retry_base_delay_ms: 1,
        },
        event_path,
        domain: "tracker.example.com".to_string(),
    }
}

#[tokio::test]
async fn integration_second_run_detects_link_posted_by_first_run() {
    let server = MockServer::start();
    let temp = tempdir().expect("tempdir");
    let event_path = temp.path().join("event.json");
    std::fs::write(
        &event_path,
        json!({
            "pull_request": { "head": { "label": "octo:FOO-123-add-test" } },
            "repository": { "full_name": "octo/widgets" }
        })
        .to_string(),
    )
    .expect("write event");
    let expected_link = create_issue_link(
        "tracker.example.com",
        &issue_id_from_head_label("octo:FOO-123-add-test"),
    );
    assert_eq!(
        expected_link,
        "[FOO-123](https://tracker.example.com/browse/FOO-123)"
    );

    server.mock(|when, then| {
        when.method(GET)
            .path("/repos/octo/widgets/pulls")
            .query_param("head", "octo:FOO-123-add-test");
        then.status(200)
            .json_body(json!([{ "number": 12, "head": { "label": "octo:FOO-123-add-test" } }]));
    });
    let mut no_comments = server.mock(|when, then| {
        when.method(GET).path("/repos/octo/widgets/issues/12/comments");
        then.status(200).json_body(json!([]));
    });
    let post = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/octo/widgets/issues/12/comments")
            .json_body(json!({ "body": expected_link }));
        then.status(201).json_body(json!({ "id": 900 }));
    });

    let config = pipeline_config(&server.base_url(), event_path);
    let first = run_pr_issue_link(&config).await.expect("first run");
    assert!(matches!(first, PrIssueLinkOutcome::CommentPosted { comment_id: 900, .. }));
    post.assert_calls(1);

    no_comments.delete();
    server.mock(|when, then| {
        when.method(GET).path("/repos/octo/widgets/issues/12/comments");
        then.status(200)
            .json_body(json!([{ "id": 900, "body": expected_link }]));
    });

    let second = run_pr_issue_link(&config).await.expect("second run");
    assert!(matches!(second, PrIssueLinkOutcome::AlreadyCommented { pr_number: 12, .. }));
    assert_eq!(second.issue_link(), first.issue_link());
    post.assert_calls(1);
}
