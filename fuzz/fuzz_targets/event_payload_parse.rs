#![no_main]

use libfuzzer_sys::fuzz_target;
use prlink_core::PullRequestEvent;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    if let Ok(event) = PullRequestEvent::from_value(value) {
        assert!(!event.head_label().trim().is_empty());
        assert!(!event.repository_full_name().trim().is_empty());
    }
});
