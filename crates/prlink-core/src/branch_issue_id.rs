use std::sync::OnceLock;

use regex::Regex;

const ISSUE_ID_PATTERN: &str = r"^\w+-\d+";

fn issue_id_regex() -> &'static Regex {
    static ISSUE_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    ISSUE_ID_REGEX
        .get_or_init(|| Regex::new(ISSUE_ID_PATTERN).expect("issue id pattern must compile"))
}

/// Parses an issue id such as `FOO-123` from the start of a branch name.
///
/// Branches are expected to look like `FOO-123-add-test`, where `FOO` is the
/// tracker project and `123` the issue number. Returns an empty string when the
/// branch does not start with that shape.
pub fn parse_issue_id(branch_name: &str) -> String {
    issue_id_regex()
        .find(branch_name)
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_default()
}

/// Drops an `owner:` prefix from a head label, keeping text after the last `:`.
pub fn strip_owner_prefix(head_label: &str) -> &str {
    head_label
        .rsplit_once(':')
        .map_or(head_label, |(_, branch)| branch)
}

pub fn issue_id_from_head_label(head_label: &str) -> String {
    parse_issue_id(strip_owner_prefix(head_label))
}
