use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use prlink_cli::Cli;
use prlink_core::{
    create_issue_link, get_actions_input, issue_id_from_head_label, read_pull_request_event,
};
use prlink_github::{GithubApiClient, GithubApiClientConfig, RepoRef};

const DOMAIN_INPUT_NAME: &str = "domain";

#[derive(Debug, Clone)]
/// Fully resolved inputs for one pipeline run.
pub struct PrIssueLinkConfig {
    pub github: GithubApiClientConfig,
    pub event_path: PathBuf,
    pub domain: String,
}

impl PrIssueLinkConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::from_cli_with_inputs(cli, get_actions_input)
    }

    /// Builds the config with `action_input` standing in for the runner's
    /// `INPUT_*` environment.
    pub fn from_cli_with_inputs<F>(cli: Cli, action_input: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let domain = resolve_domain(cli.domain.as_deref(), action_input)?;
        Ok(Self {
            github: GithubApiClientConfig {
                api_base: cli.github_api_base,
                token: cli.github_token,
                request_timeout_ms: cli.request_timeout_ms,
                retry_max_attempts: cli.retry_max_attempts,
                retry_base_delay_ms: cli.retry_base_delay_ms,
            },
            event_path: cli.event_path,
            domain,
        })
    }
}

/// Picks the tracker domain from `--domain`, else the `domain` action input.
///
/// Blank values count as unset, and surrounding whitespace is dropped since a
/// hostname never carries it.
pub fn resolve_domain<F>(flag: Option<&str>, action_input: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    fn non_blank(value: &str) -> Option<String> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    flag.and_then(non_blank)
        .or_else(|| action_input(DOMAIN_INPUT_NAME).as_deref().and_then(non_blank))
        .ok_or_else(|| {
            anyhow!("missing issue tracker domain: pass --domain or set the `domain` action input")
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrIssueLinkOutcome {
    AlreadyCommented {
        pr_number: u64,
        issue_id: String,
        issue_link: String,
    },
    CommentPosted {
        pr_number: u64,
        issue_id: String,
        issue_link: String,
        comment_id: u64,
    },
}

impl PrIssueLinkOutcome {
    pub fn issue_link(&self) -> &str {
        match self {
            Self::AlreadyCommented { issue_link, .. } | Self::CommentPosted { issue_link, .. } => {
                issue_link
            }
        }
    }
}

/// Ensures the issue link for the event's head branch is commented on its pull
/// request exactly once.
///
/// The first open pull request GitHub lists for the head label is used; having
/// none is an error. Checking and posting are not atomic, so two concurrent
/// runs on the same pull request can both post.
pub async fn run_pr_issue_link(config: &PrIssueLinkConfig) -> Result<PrIssueLinkOutcome> {
    let event = read_pull_request_event(&config.event_path)?;
    let head_label = event.head_label();
    let repo = RepoRef::parse(event.repository_full_name())
        .context("event payload repository.full_name is invalid")?;
    tracing::debug!(
        repository = %repo,
        head_label,
        event_pr_number = ?event.pull_request.number,
        "event loaded"
    );

    let client = GithubApiClient::new(config.github.clone(), repo)?;
    let pull_requests = client.list_open_pull_requests_for_head(head_label).await?;
    let Some(pull_request) = pull_requests.first() else {
        bail!(
            "no open pull request found in {} for head '{}'",
            client.repo(),
            head_label
        );
    };
    let pr_number = pull_request.number;
    tracing::debug!(pr_number, matches = pull_requests.len(), "pull request resolved");

    let issue_id = issue_id_from_head_label(head_label);
    if issue_id.is_empty() {
        tracing::warn!(head_label, "head branch does not start with an issue id");
    }
    let issue_link = create_issue_link(&config.domain, &issue_id);

    let comments = client.list_issue_comments(pr_number).await?;
    tracing::debug!(pr_number, comment_count = comments.len(), "comments loaded");
    let existing = comments
        .iter()
        .find(|comment| comment.body.as_deref() == Some(issue_link.as_str()));
    if let Some(existing) = existing {
        tracing::info!(
            pr_number,
            issue_id = issue_id.as_str(),
            comment_id = existing.id,
            "issue link already present"
        );
        return Ok(PrIssueLinkOutcome::AlreadyCommented {
            pr_number,
            issue_id,
            issue_link,
        });
    }

    let created = client.create_issue_comment(pr_number, &issue_link).await?;
    tracing::info!(
        pr_number,
        issue_id = issue_id.as_str(),
        comment_id = created.id,
        comment_url = created.html_url.as_deref().unwrap_or_default(),
        "issue link comment posted"
    );
    Ok(PrIssueLinkOutcome::CommentPosted {
        pr_number,
        issue_id,
        issue_link,
        comment_id: created.id,
    })
}
