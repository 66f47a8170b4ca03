use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use taskboard_shared::filter::compare_titles;
use taskboard_shared::{derive_view, SortKey, Task, TaskCriteria, TaskId, TaskStatus};

fn status_strategy() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Pending),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Done),
    ]
}

fn sort_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![Just(SortKey::None), Just(SortKey::Deadline), Just(SortKey::Title)]
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// (title, description, assignee, deadline offset in days, status)
type Row = (String, String, String, i64, TaskStatus);

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        "[a-cA-C ]{0,8}",
        "[a-cA-C ]{0,8}",
        "[a-cA-C ]{0,6}",
        0i64..5,
        status_strategy(),
    )
}

fn make_tasks(rows: &[Row]) -> Vec<Task> {
    rows.iter()
        .enumerate()
        .map(|(index, (title, description, assignee, days, status))| Task {
            id: TaskId::new(index.to_string()),
            title: title.clone(),
            description: description.clone(),
            deadline: epoch() + Duration::days(*days),
            assigned_to: assignee.clone(),
            status: *status,
            created_at: epoch(),
            updated_at: epoch(),
        })
        .collect()
}

fn position(task: &Task) -> usize {
    task.id.as_str().parse().unwrap()
}

fn matches(task: &Task, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [&task.title, &task.description, &task.assigned_to]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

proptest! {
    #[test]
    fn empty_criteria_is_identity(rows in prop::collection::vec(row_strategy(), 0..32)) {
        let tasks = make_tasks(&rows);
        prop_assert_eq!(derive_view(&tasks, &TaskCriteria::default()), tasks);
    }

    #[test]
    fn search_is_sound_and_complete(
        rows in prop::collection::vec(row_strategy(), 0..32),
        needle in "[a-cA-C]{1,2}",
    ) {
        let tasks = make_tasks(&rows);
        let criteria = TaskCriteria { search: needle.clone(), ..TaskCriteria::default() };
        let view = derive_view(&tasks, &criteria);

        prop_assert!(view.iter().all(|task| matches(task, &needle)));
        let expected: Vec<&Task> = tasks.iter().filter(|task| matches(task, &needle)).collect();
        prop_assert_eq!(view.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn status_filter_keeps_exact_multiset(
        rows in prop::collection::vec(row_strategy(), 0..32),
        target in status_strategy(),
    ) {
        let tasks = make_tasks(&rows);
        let criteria = TaskCriteria { status: Some(target), ..TaskCriteria::default() };
        let view = derive_view(&tasks, &criteria);

        let expected: Vec<Task> = tasks.iter().filter(|t| t.status == target).cloned().collect();
        prop_assert_eq!(view, expected);
    }

    #[test]
    fn sorting_orders_and_is_stable(
        rows in prop::collection::vec(row_strategy(), 0..32),
        sort in sort_strategy(),
    ) {
        let tasks = make_tasks(&rows);
        let criteria = TaskCriteria { sort, ..TaskCriteria::default() };
        let view = derive_view(&tasks, &criteria);
        prop_assert_eq!(view.len(), tasks.len());

        for pair in view.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match sort {
                SortKey::None => prop_assert!(position(a) < position(b)),
                SortKey::Deadline => {
                    prop_assert!(a.deadline <= b.deadline);
                    if a.deadline == b.deadline {
                        prop_assert!(position(a) < position(b));
                    }
                }
                SortKey::Title => {
                    let order = compare_titles(&a.title, &b.title);
                    prop_assert!(order != std::cmp::Ordering::Greater);
                    if order == std::cmp::Ordering::Equal {
                        prop_assert!(position(a) < position(b));
                    }
                }
            }
        }
    }

    #[test]
    fn accented_titles_sort_beside_their_base_letter(
        titles in prop::collection::vec("[eéEÉzZ][a-c]{0,3}", 0..16),
    ) {
        let rows: Vec<Row> = titles
            .into_iter()
            .map(|title| (title, String::new(), String::new(), 0, TaskStatus::Pending))
            .collect();
        let tasks = make_tasks(&rows);
        let criteria = TaskCriteria { sort: SortKey::Title, ..TaskCriteria::default() };
        let view = derive_view(&tasks, &criteria);

        let starts_with_z = |task: &Task| task.title.starts_with(['z', 'Z']);
        let first_z = view.iter().position(starts_with_z).unwrap_or(view.len());
        prop_assert!(view[first_z..].iter().all(starts_with_z));
    }

    #[test]
    fn filters_compose_with_sorting(
        rows in prop::collection::vec(row_strategy(), 0..32),
        needle in "[a-c]{0,1}",
        target in prop::option::of(status_strategy()),
        sort in sort_strategy(),
    ) {
        let tasks = make_tasks(&rows);
        let criteria = TaskCriteria { search: needle.clone(), status: target, sort };
        let mut view = derive_view(&tasks, &criteria);

        let mut expected: Vec<Task> = tasks
            .iter()
            .filter(|t| needle.is_empty() || matches(t, &needle))
            .filter(|t| target.map_or(true, |s| t.status == s))
            .cloned()
            .collect();
        view.sort_by_key(position);
        expected.sort_by_key(position);
        prop_assert_eq!(view, expected);
    }
}
