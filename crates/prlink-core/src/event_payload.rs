//! Typed access to the `pull_request` event payload written by GitHub Actions.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestEvent {
    pub pull_request: EventPullRequest,
    pub repository: EventRepository,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventPullRequest {
    #[serde(default)]
    pub number: Option<u64>,
    pub head: EventPullRequestHead,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventPullRequestHead {
    /// `owner:branch` label of the source branch.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRepository {
    /// `owner/name` of the repository the pull request targets.
    pub full_name: String,
}

impl PullRequestEvent {
    pub fn head_label(&self) -> &str {
        &self.pull_request.head.label
    }

    pub fn repository_full_name(&self) -> &str {
        &self.repository.full_name
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let event: Self = serde_json::from_value(value)
            .context("event payload is not a pull_request event")?;
        event.validate()?;
        Ok(event)
    }

    fn validate(&self) -> Result<()> {
        if self.pull_request.head.label.trim().is_empty() {
            bail!("event payload field pull_request.head.label is empty");
        }
        if self.repository.full_name.trim().is_empty() {
            bail!("event payload field repository.full_name is empty");
        }
        Ok(())
    }
}

pub fn read_json(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn read_pull_request_event(path: &Path) -> Result<PullRequestEvent> {
    let value = read_json(path)?;
    PullRequestEvent::from_value(value)
        .with_context(|| format!("invalid event payload {}", path.display()))
}
