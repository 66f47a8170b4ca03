use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use tracing::{debug, warn};

use crate::model::{Task, TaskId, TaskStatus};

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep the order of the base list.
    #[default]
    None,
    Deadline,
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::None, SortKey::Deadline, SortKey::Title];

    /// Query-string value; empty for the unsorted order.
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::Deadline => "deadline",
            SortKey::Title => "title",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "Default",
            SortKey::Deadline => "Deadline",
            SortKey::Title => "Title",
        }
    }

    /// Lenient parse: anything unrecognised leaves the order unchanged.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "deadline" => SortKey::Deadline,
            "title" => SortKey::Title,
            _ => SortKey::None,
        }
    }
}

/// Inputs of the task list filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCriteria {
    pub search: String,
    pub status: Option<TaskStatus>,
    pub sort: SortKey,
}

impl TaskCriteria {
    /// Builds criteria from the raw strings of the filter controls. An empty
    /// or unknown status means "any status".
    pub fn from_inputs(search: &str, status: &str, sort: &str) -> Self {
        Self {
            search: search.to_string(),
            status: status.parse().ok(),
            sort: SortKey::parse(sort),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.status.is_none() && self.sort == SortKey::None
    }
}

/// Case-insensitive substring matcher over title, description and assignee.
struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(Self {
            needle: query.to_lowercase(),
        })
    }

    fn matches(&self, task: &Task) -> bool {
        self.matches_field(&task.title)
            || self.matches_field(&task.description)
            || self.matches_field(&task.assigned_to)
    }

    fn matches_field(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.needle)
    }
}

/// Locale-aware title ordering: accents and case only break ties between
/// otherwise equal titles, lowercase first.
pub struct TitleCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl TitleCollator {
    pub fn new() -> Self {
        let collator = Collator::try_new(Default::default(), CollatorOptions::default())
            .map_err(|err| warn!(%err, "title collation data unavailable, folding case instead"))
            .ok();
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
        }
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off title comparison. Sorting should reuse a [`TitleCollator`].
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TitleCollator::new().compare(a, b)
}

/// Derives the visible list from the full list. Always recomputed from
/// scratch; the base list is never modified.
pub fn derive_view(tasks: &[Task], criteria: &TaskCriteria) -> Vec<Task> {
    let matcher = TextMatcher::new(&criteria.search);
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| matcher.as_ref().map_or(true, |m| m.matches(task)))
        .filter(|task| criteria.status.map_or(true, |status| task.status == status))
        .cloned()
        .collect();

    // `sort_by` is stable, so ties keep their filtered order.
    match criteria.sort {
        SortKey::None => {}
        SortKey::Deadline => view.sort_by_key(|task| task.deadline),
        SortKey::Title => {
            let collator = TitleCollator::new();
            view.sort_by(|a, b| collator.compare(&a.title, &b.title));
        }
    }
    view
}

/// Holds the fetched list plus the derived view shown on the task list page.
#[derive(Debug, Clone, Default)]
pub struct TaskListView {
    base: Vec<Task>,
    criteria: TaskCriteria,
    visible: Vec<Task>,
}

impl TaskListView {
    pub fn new(tasks: Vec<Task>) -> Self {
        let mut view = Self {
            base: tasks,
            ..Self::default()
        };
        view.recompute();
        view
    }

    pub fn all(&self) -> &[Task] {
        &self.base
    }

    pub fn visible(&self) -> &[Task] {
        &self.visible
    }

    pub fn criteria(&self) -> &TaskCriteria {
        &self.criteria
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.base.iter().find(|task| &task.id == id)
    }

    /// Replaces the base list after a fetch, keeping the current criteria.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.base = tasks;
        self.recompute();
    }

    pub fn set_criteria(&mut self, criteria: TaskCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.recompute();
    }

    pub fn set_status(&mut self, status: Option<TaskStatus>) {
        self.criteria.status = status;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.criteria.sort = sort;
        self.recompute();
    }

    /// Inserts or replaces a task returned by the server.
    pub fn upsert(&mut self, task: Task) {
        match self.base.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => self.base.push(task),
        }
        self.recompute();
    }

    /// Drops a deleted task from both lists without a re-fetch. Returns
    /// whether the task was present.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.base.len();
        self.base.retain(|task| &task.id != id);
        self.visible.retain(|task| &task.id != id);
        before != self.base.len()
    }

    fn recompute(&mut self) {
        self.visible = derive_view(&self.base, &self.criteria);
        debug!(
            total = self.base.len(),
            visible = self.visible.len(),
            "task list view recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn task(id: &str, title: &str, status: TaskStatus, due_in_days: i64) -> Task {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Task {
            id: TaskId::new(id),
            title: title.to_string(),
            description: format!("{title} description"),
            deadline: created + Duration::days(due_in_days),
            assigned_to: "Emma Johnson".to_string(),
            status,
            created_at: created,
            updated_at: created,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", "Alpha", TaskStatus::Pending, 5),
            task("2", "Beta", TaskStatus::Done, 2),
            task("3", "Gamma", TaskStatus::InProgress, 10),
        ]
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn criteria_parse_from_raw_inputs() {
        let criteria = TaskCriteria::from_inputs("api", "In Progress", "deadline");
        assert_eq!(criteria.status, Some(TaskStatus::InProgress));
        assert_eq!(criteria.sort, SortKey::Deadline);

        let loose = TaskCriteria::from_inputs("", "", "priority");
        assert!(loose.is_empty());
    }

    #[test]
    fn search_matches_any_text_field_ignoring_case() {
        let mut tasks = sample();
        tasks[1].assigned_to = "Liam Chen".into();
        tasks[2].description = "Tune the QUERY planner".into();

        let by_assignee = derive_view(&tasks, &TaskCriteria::from_inputs("liam", "", ""));
        assert_eq!(titles(&by_assignee), ["Beta"]);

        let by_description = derive_view(&tasks, &TaskCriteria::from_inputs("query", "", ""));
        assert_eq!(titles(&by_description), ["Gamma"]);

        let by_title = derive_view(&tasks, &TaskCriteria::from_inputs("ALP", "", ""));
        assert_eq!(titles(&by_title), ["Alpha"]);
    }

    #[test]
    fn status_and_search_are_conjunctive() {
        let tasks = sample();
        let view = derive_view(&tasks, &TaskCriteria::from_inputs("a", "Done", ""));
        assert_eq!(titles(&view), ["Beta"]);
        let none = derive_view(&tasks, &TaskCriteria::from_inputs("gamma", "Done", ""));
        assert!(none.is_empty());
    }

    #[test]
    fn sorts_by_deadline_and_title() {
        let tasks = sample();
        let by_deadline = derive_view(&tasks, &TaskCriteria::from_inputs("", "", "deadline"));
        assert_eq!(titles(&by_deadline), ["Beta", "Alpha", "Gamma"]);

        let mut shuffled = tasks.clone();
        shuffled.reverse();
        let by_title = derive_view(&shuffled, &TaskCriteria::from_inputs("", "", "title"));
        assert_eq!(titles(&by_title), ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn title_collation_ignores_case_first() {
        assert_eq!(compare_titles("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_titles("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(compare_titles("alpha", "Alpha"), Ordering::Less);
        assert_eq!(compare_titles("Alpha", "Alpha"), Ordering::Equal);
    }

    #[test]
    fn accented_titles_sort_with_their_base_letter() {
        assert_eq!(compare_titles("Émile onboarding", "Zoe review"), Ordering::Less);
        assert_eq!(compare_titles("apple", "Émile onboarding"), Ordering::Less);
        assert_eq!(compare_titles("Ecole", "École"), Ordering::Less);

        let tasks = vec![
            task("1", "Zoe review", TaskStatus::Pending, 1),
            task("2", "Émile onboarding", TaskStatus::Pending, 2),
            task("3", "apple", TaskStatus::Pending, 3),
        ];
        let view = derive_view(&tasks, &TaskCriteria::from_inputs("", "", "title"));
        assert_eq!(titles(&view), ["apple", "Émile onboarding", "Zoe review"]);
    }

    #[test]
    fn sort_is_stable_for_equal_deadlines() {
        let tasks = vec![
            task("1", "First", TaskStatus::Pending, 3),
            task("2", "Second", TaskStatus::Pending, 1),
            task("3", "Third", TaskStatus::Pending, 3),
        ];
        let view = derive_view(&tasks, &TaskCriteria::from_inputs("", "", "deadline"));
        assert_eq!(titles(&view), ["Second", "First", "Third"]);
    }

    #[test]
    fn list_view_recomputes_from_base_on_every_change() {
        let mut list = TaskListView::new(sample());
        list.set_status(Some(TaskStatus::Pending));
        assert_eq!(titles(list.visible()), ["Alpha"]);

        list.set_status(None);
        list.set_sort(SortKey::Deadline);
        assert_eq!(titles(list.visible()), ["Beta", "Alpha", "Gamma"]);

        list.set_search("gam");
        assert_eq!(titles(list.visible()), ["Gamma"]);
        assert_eq!(list.all().len(), 3);
    }

    #[test]
    fn remove_drops_task_from_both_lists() {
        let mut list = TaskListView::new(sample());
        list.set_criteria(TaskCriteria::from_inputs("", "", "title"));
        assert!(list.remove(&TaskId::new("2")));
        assert_eq!(titles(list.all()), ["Alpha", "Gamma"]);
        assert_eq!(titles(list.visible()), ["Alpha", "Gamma"]);
        assert!(!list.remove(&TaskId::new("2")));
    }

    #[test]
    fn upsert_replaces_or_appends() {
        let mut list = TaskListView::new(sample());
        let mut edited = list.find(&TaskId::new("1")).cloned().unwrap();
        edited.status = TaskStatus::Done;
        list.upsert(edited);
        list.set_status(Some(TaskStatus::Done));
        assert_eq!(titles(list.visible()), ["Alpha", "Beta"]);

        list.upsert(task("4", "Delta", TaskStatus::Done, 1));
        assert_eq!(list.all().len(), 4);
        assert_eq!(titles(list.visible()), ["Alpha", "Beta", "Delta"]);
    }
}
