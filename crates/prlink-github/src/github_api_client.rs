use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::github_retry::{GithubRetryPolicy, RequestFailure};
use crate::github_types::{GithubCommentCreateResponse, GithubIssueComment, GithubPullRequest};
use crate::repo_ref::RepoRef;

const GITHUB_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct GithubApiClientConfig {
    pub api_base: String,
    pub token: String,
    pub request_timeout_ms: u64,
    pub retry_max_attempts: usize,
    pub retry_base_delay_ms: u64,
}

#[derive(Clone)]
/// Repository-scoped GitHub REST client.
pub struct GithubApiClient {
    http: reqwest::Client,
    api_base: String,
    repo: RepoRef,
    retry: GithubRetryPolicy,
}

impl GithubApiClient {
    pub fn new(config: GithubApiClientConfig, repo: RepoRef) -> Result<Self> {
        let token = config.token.trim();
        if token.is_empty() {
            bail!("github token is empty");
        }
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("prlink-action"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            reqwest::header::HeaderValue::from_static("2022-11-28"),
        );
        let auth_header = format!("Bearer {token}");
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&auth_header)
                .context("invalid github authorization header")?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()
            .context("failed to create github api client")?;
        Ok(Self {
            http: client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            repo,
            retry: GithubRetryPolicy::new(config.retry_max_attempts, config.retry_base_delay_ms),
        })
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// Lists open pull requests whose head matches `head_label`, in the order
    /// GitHub returns for `sort=created`. Only the first page is fetched.
    pub async fn list_open_pull_requests_for_head(
        &self,
        head_label: &str,
    ) -> Result<Vec<GithubPullRequest>> {
        let page_size = GITHUB_PAGE_SIZE.to_string();
        self.request_json("list pull requests", || {
            self.http
                .get(format!(
                    "{}/repos/{}/{}/pulls",
                    self.api_base, self.repo.owner, self.repo.name
                ))
                .query(&[
                    ("state", "open"),
                    ("sort", "created"),
                    ("head", head_label),
                    ("per_page", page_size.as_str()),
                ])
        })
        .await
    }

    pub async fn list_issue_comments(&self, issue_number: u64) -> Result<Vec<GithubIssueComment>> {
        let mut page = 1_u32;
        let mut rows = Vec::new();
        let page_size = GITHUB_PAGE_SIZE.to_string();
        loop {
            let page_value = page.to_string();
            let chunk: Vec<GithubIssueComment> = self
                .request_json("list issue comments", || {
                    self.http
                        .get(format!(
                            "{}/repos/{}/{}/issues/{}/comments",
                            self.api_base, self.repo.owner, self.repo.name, issue_number
                        ))
                        .query(&[
                            ("per_page", page_size.as_str()),
                            ("page", page_value.as_str()),
                        ])
                })
                .await?;
            let chunk_len = chunk.len();
            rows.extend(chunk);
            if chunk_len < GITHUB_PAGE_SIZE {
                break;
            }
            page = page.saturating_add(1);
        }
        Ok(rows)
    }

    pub async fn create_issue_comment(
        &self,
        issue_number: u64,
        body: &str,
    ) -> Result<GithubCommentCreateResponse> {
        let payload = json!({ "body": body });
        self.request_json("create issue comment", || {
            self.http
                .post(format!(
                    "{}/repos/{}/{}/issues/{}/comments",
                    self.api_base, self.repo.owner, self.repo.name, issue_number
                ))
                .json(&payload)
        })
        .await
    }

    async fn request_json<T, F>(&self, operation: &str, mut request_builder: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnMut() -> reqwest::RequestBuilder,
    {
        let mut attempt = 0_usize;
        loop {
            attempt = attempt.saturating_add(1);
            let failure = match request_builder().send().await {
                Ok(response) if response.status().is_success() => {
                    return response
                        .json::<T>()
                        .await
                        .with_context(|| format!("failed to decode github {operation}"));
                }
                Ok(response) => RequestFailure::from_response(response).await,
                Err(error) => RequestFailure::Transport(error),
            };
            let Some(delay) = self.retry.delay_before_retry(attempt, &failure) else {
                return Err(failure.into_error(operation));
            };
            tracing::debug!(
                operation,
                attempt,
                delay_ms = delay.as_millis() as u64,
                failure = ?failure,
                "retrying github request"
            );
            tokio::time::sleep(delay).await;
        }
    }
}
