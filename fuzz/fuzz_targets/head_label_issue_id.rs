#![no_main]

use libfuzzer_sys::fuzz_target;
use prlink_core::{
    create_issue_link, issue_id_from_head_label, issue_link_label, parse_issue_id,
    strip_owner_prefix,
};

fuzz_target!(|data: &[u8]| {
    let label = String::from_utf8_lossy(data);
    let branch = strip_owner_prefix(&label);
    assert!(!branch.contains(':'));

    let issue_id = issue_id_from_head_label(&label);
    assert_eq!(issue_id, parse_issue_id(branch));
    assert!(branch.starts_with(&issue_id));

    let link = create_issue_link("tracker.example.com", &issue_id);
    assert_eq!(issue_link_label(&link), Some(issue_id.as_str()));
});
