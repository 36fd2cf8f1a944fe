use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
/// Pull request row returned by the `pulls` listing.
pub struct GithubPullRequest {
    pub number: u64,
}

#[derive(Debug, Clone, Deserialize)]
/// Issue comment row; `body` is absent for some deleted or minimized comments.
pub struct GithubIssueComment {
    pub id: u64,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubCommentCreateResponse {
    pub id: u64,
    pub html_url: Option<String>,
}
