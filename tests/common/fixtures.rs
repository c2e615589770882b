//! Shared issue fixtures for integration tests.

use issue_tracker::{Issue, string_set};

pub fn issue1() -> Issue {
    Issue::new(
        1001,
        true,
        "Author1",
        7,
        string_set(["label1", "label2", "label3"]),
        string_set(["Assignee1", "Assignee2", "Assignee3"]),
    )
}

pub fn issue2() -> Issue {
    Issue::new(
        1002,
        false,
        "Author2",
        12,
        string_set(["label13", "label4", "label7"]),
        string_set(["Assignee1", "Assignee3", "Assignee4"]),
    )
}

pub fn issue3() -> Issue {
    Issue::new(
        1003,
        true,
        "Author1",
        2,
        string_set(["label1", "label3", "label5"]),
        string_set(["Assignee3", "Assignee5", "Assignee6"]),
    )
}

pub fn issue4() -> Issue {
    Issue::new(
        1004,
        false,
        "Author2",
        21,
        string_set(["label4", "label3", "label9"]),
        string_set(["Assignee1", "Assignee2", "Assignee4"]),
    )
}

pub fn all_four() -> Vec<Issue> {
    vec![issue1(), issue2(), issue3(), issue4()]
}

pub fn ids(issues: &[&Issue]) -> Vec<i64> {
    issues.iter().map(|issue| issue.id()).collect()
}
