//! GitHub REST access for pull-request issue linking.
//!
//! Wraps the pull request lookup and issue comment endpoints behind a
//! repository-scoped client with a bounded retry policy.

pub mod github_api_client;
mod github_retry;
pub mod github_types;
pub mod repo_ref;

pub use github_api_client::{GithubApiClient, GithubApiClientConfig};
pub use github_types::{GithubCommentCreateResponse, GithubIssueComment, GithubPullRequest};
pub use repo_ref::RepoRef;
