//! Branch-to-issue linking primitives for pull-request automation.
//!
//! Provides the event payload reader, GitHub Actions input lookup, issue id
//! parsing from branch labels, and markdown issue link formatting.

pub mod actions_input;
pub mod branch_issue_id;
pub mod event_payload;
pub mod issue_link;

pub use actions_input::{actions_input_env_name, get_actions_input, get_actions_input_from};
pub use branch_issue_id::{issue_id_from_head_label, parse_issue_id, strip_owner_prefix};
pub use event_payload::{read_json, read_pull_request_event, PullRequestEvent};
pub use issue_link::{create_issue_link, issue_link_label};
