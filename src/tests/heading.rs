use super::{is_fence, marker_depth, scan_headings, Heading};
use crate::settings::Settings;

#[test]
fn test_marker_depth_counts_leading_run() {
    assert_eq!(marker_depth("### Title", "#"), 3);
    assert_eq!(marker_depth("# Title # not counted", "#"), 1);
    assert_eq!(marker_depth("Title", "#"), 0);
    assert_eq!(marker_depth("", "#"), 0);
    assert_eq!(marker_depth(" # indented", "#"), 0);
}

#[test]
fn test_marker_depth_multi_character_marker() {
    assert_eq!(marker_depth("==== Title", "=="), 2);
    assert_eq!(marker_depth("=== Title", "=="), 1);
}

#[test]
fn test_marker_depth_empty_marker() {
    assert_eq!(marker_depth("# Title", ""), 0);
}

#[test]
fn test_fence_detection() {
    assert!(is_fence("```"));
    assert!(is_fence("```rust"));
    assert!(!is_fence("``"));
    assert!(!is_fence("  ```"));
}

#[test]
fn test_scan_skips_literal_regions() {
    let lines = ["# A", "```", "# fake", "```", "# B"];
    let headings = scan_headings(&lines, &Settings::default());
    assert_eq!(
        headings,
        vec![
            Heading { line: 0, depth: 1 },
            Heading { line: 4, depth: 1 }
        ]
    );
}

#[test]
fn test_scan_skips_shallow_headings() {
    let settings = Settings::new(None, Some("2"));
    let lines = ["# Title", "## A", "text", "### B", "# Other"];
    let headings = scan_headings(&lines, &settings);
    assert_eq!(
        headings,
        vec![
            Heading { line: 1, depth: 2 },
            Heading { line: 3, depth: 3 }
        ]
    );
}

#[test]
fn test_scan_unterminated_literal_region() {
    let lines = ["# A", "```", "# hidden", "## hidden"];
    let headings = scan_headings(&lines, &Settings::default());
    assert_eq!(headings, vec![Heading { line: 0, depth: 1 }]);
}
