//! Pull request issue-link pipeline behind the `prlink-action` binary.
//!
//! Resolves configuration once from CLI flags and action inputs, then runs a
//! single check-then-comment pass against the pull request named by the event.

pub mod bootstrap_helpers;
pub mod pr_issue_link;

pub use bootstrap_helpers::init_tracing;
pub use pr_issue_link::{
    resolve_domain, run_pr_issue_link, PrIssueLinkConfig, PrIssueLinkOutcome,
};
