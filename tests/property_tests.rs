use proptest::prelude::*;
use std::collections::BTreeSet;

use issue_tracker::{Issue, IssueManager, IssueRepository, Status, string_set};

const AUTHORS: [&str; 3] = ["Author1", "Author2", "Author3"];
const LABELS: [&str; 5] = ["label1", "label2", "label3", "label4", "label5"];

fn issue_strategy() -> impl Strategy<Value = Issue> {
    (
        0i64..12,
        any::<bool>(),
        0usize..AUTHORS.len(),
        -50i32..50,
        prop::collection::btree_set(prop::sample::select(LABELS.to_vec()), 0..4),
        prop::collection::btree_set("Assignee[1-4]", 0..3),
    )
        .prop_map(|(id, is_open, author, price, labels, assignees)| {
            Issue::new(
                id,
                is_open,
                AUTHORS[author],
                price,
                string_set(labels),
                assignees,
            )
        })
}

fn positions(all: &[Issue], subset: &[&Issue]) -> Vec<usize> {
    subset
        .iter()
        .map(|wanted| {
            all.iter()
                .position(|issue| std::ptr::eq(issue, *wanted))
                .expect("subset issue comes from the repository")
        })
        .collect()
}

proptest! {
    #[test]
    fn test_oldest_is_insertion_order_and_newest_its_reverse(
        first in prop::collection::vec(issue_strategy(), 0..8),
        single in issue_strategy(),
        rest in prop::collection::vec(issue_strategy(), 0..8),
    ) {
        let mut expected: Vec<Issue> = first.clone();
        expected.push(single.clone());
        expected.extend(rest.iter().cloned());

        let mut repo = IssueRepository::new();
        let mut manager = IssueManager::new(&mut repo);
        manager.add_all(first);
        manager.issue_add(single);
        manager.add_all(rest);

        let oldest: Vec<Issue> = manager.sort_by_oldest().into_iter().cloned().collect();
        prop_assert_eq!(&oldest, &expected);

        let mut newest: Vec<Issue> = manager.sort_by_newest().into_iter().cloned().collect();
        newest.reverse();
        prop_assert_eq!(&newest, &expected);
    }

    #[test]
    fn test_open_and_closed_partition_the_collection(
        issues in prop::collection::vec(issue_strategy(), 0..16),
        toggles in prop::collection::vec((0i64..12, any::<bool>()), 0..8),
    ) {
        let mut repo = IssueRepository::new();
        repo.add_all(issues);
        for (id, open) in toggles {
            if open {
                repo.open_by_id(id);
            } else {
                repo.close_by_id(id);
            }
        }

        let open = repo.find_open();
        let closed = repo.find_closed();
        prop_assert_eq!(open.len() + closed.len(), repo.len());
        prop_assert!(open.iter().all(|issue| issue.status() == Status::Open));
        prop_assert!(closed.iter().all(|issue| issue.status() == Status::Closed));

        let open_positions = positions(repo.all(), &open);
        let closed_positions = positions(repo.all(), &closed);
        prop_assert!(open_positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(closed_positions.windows(2).all(|w| w[0] < w[1]));

        let mut every: Vec<usize> = open_positions;
        every.extend(closed_positions);
        every.sort_unstable();
        prop_assert_eq!(every, (0..repo.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_close_and_open_are_idempotent(
        issues in prop::collection::vec(issue_strategy(), 0..12),
        id in 0i64..12,
    ) {
        let mut once = IssueRepository::new();
        once.add_all(issues.clone());
        once.close_by_id(id);

        let mut twice = once.clone();
        twice.close_by_id(id);
        prop_assert_eq!(once.all(), twice.all());

        once.open_by_id(id);
        let mut reopened_twice = once.clone();
        reopened_twice.open_by_id(id);
        prop_assert_eq!(once.all(), reopened_twice.all());
    }

    #[test]
    fn test_author_query_is_exact_subsequence(
        issues in prop::collection::vec(issue_strategy(), 0..16),
        author in 0usize..AUTHORS.len(),
    ) {
        let mut repo = IssueRepository::new();
        let mut manager = IssueManager::new(&mut repo);
        manager.add_all(issues);

        let wanted = AUTHORS[author];
        let found = manager.find_by_author(wanted);
        let expected: Vec<&Issue> = manager
            .get_all()
            .iter()
            .filter(|issue| issue.author() == wanted)
            .collect();
        prop_assert_eq!(&found, &expected);

        for other in AUTHORS.iter().filter(|a| **a != wanted) {
            let others = manager.find_by_author(other);
            prop_assert!(found.iter().all(|issue| !others.iter().any(|o| std::ptr::eq(*o, *issue))));
        }
    }

    #[test]
    fn test_label_query_is_any_intersection(
        issues in prop::collection::vec(issue_strategy(), 0..16),
        query in prop::collection::btree_set(prop::sample::select(LABELS.to_vec()), 0..3),
    ) {
        let mut repo = IssueRepository::new();
        let mut manager = IssueManager::new(&mut repo);
        manager.add_all(issues);

        let wanted: BTreeSet<String> = string_set(&query);
        let found = manager.find_by_label(&query);
        let expected: Vec<&Issue> = manager
            .get_all()
            .iter()
            .filter(|issue| issue.labels().iter().any(|label| wanted.contains(label)))
            .collect();
        prop_assert_eq!(found, expected);
    }
}
