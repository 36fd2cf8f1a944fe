/// Formats a markdown link to the tracker's browse page for `issue_id`.
///
/// Neither argument is validated: an empty `issue_id` yields
/// `[](https://<domain>/browse/)`.
pub fn create_issue_link(domain: &str, issue_id: &str) -> String {
    let url = format!("https://{domain}/browse/{issue_id}");
    format!("[{issue_id}]({url})")
}

/// Returns the bracketed label of a markdown link, if `link` is one.
pub fn issue_link_label(link: &str) -> Option<&str> {
    let rest = link.strip_prefix('[')?;
    let end = rest.find("](")?;
    rest.ends_with(')').then(|| &rest[..end])
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{create_issue_link, issue_link_label};

    #[test]
    fn unit_create_issue_link_formats_markdown_browse_link() {
        assert_eq!(
            create_issue_link("tracker.example.com", "FOO-123"),
            "[FOO-123](https://tracker.example.com/browse/FOO-123)"
        );
    }

    #[test]
    fn regression_create_issue_link_accepts_empty_issue_id() {
        assert_eq!(
            create_issue_link("tracker.co", ""),
            "[](https://tracker.co/browse/)"
        );
    }

    #[test]
    fn unit_issue_link_label_rejects_non_links() {
        assert_eq!(issue_link_label("FOO-123"), None);
        assert_eq!(issue_link_label("[FOO-123]"), None);
        assert_eq!(issue_link_label("[FOO-123](https://x/browse/FOO-123"), None);
    }

    proptest! {
        #[test]
        fn property_issue_link_label_recovers_issue_id(
            domain in "[a-z0-9.-]{1,24}",
            issue_id in "([A-Za-z0-9_]{1,8}-[0-9]{1,6})?",
        ) {
            let link = create_issue_link(&domain, &issue_id);
            prop_assert_eq!(issue_link_label(&link), Some(issue_id.as_str()));
        }
    }
}
