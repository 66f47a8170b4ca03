//! Digests shown on the dashboard landing page.

use chrono::{DateTime, Utc};

use crate::model::{Task, TaskStatus};

pub const DIGEST_LIMIT: usize = 5;

/// Most recently updated tasks first.
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut recent = tasks.to_vec();
    recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    recent.truncate(limit);
    recent
}

/// Open tasks whose deadline is still ahead, soonest first.
pub fn upcoming_deadlines(tasks: &[Task], now: DateTime<Utc>, limit: usize) -> Vec<Task> {
    let mut upcoming: Vec<Task> = tasks
        .iter()
        .filter(|task| task.status != TaskStatus::Done && task.deadline > now)
        .cloned()
        .collect();
    upcoming.sort_by_key(|task| task.deadline);
    upcoming.truncate(limit);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()
    }

    fn task(id: &str, status: TaskStatus, due_days: i64, updated_days_ago: i64) -> Task {
        Task {
            id: TaskId::new(id),
            title: format!("Task {id}"),
            description: "d".into(),
            deadline: now() + Duration::days(due_days),
            assigned_to: "a".into(),
            status,
            created_at: now() - Duration::days(30),
            updated_at: now() - Duration::days(updated_days_ago),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn recent_orders_by_update_time_and_caps() {
        let tasks: Vec<Task> = (0..7)
            .map(|i| task(&i.to_string(), TaskStatus::Pending, 1, (i * 3) % 7))
            .collect();
        let recent = recent_tasks(&tasks, DIGEST_LIMIT);
        assert_eq!(recent.len(), DIGEST_LIMIT);
        assert!(recent.windows(2).all(|w| w[0].updated_at >= w[1].updated_at));
        assert_eq!(recent[0].id.as_str(), "0");
    }

    #[test]
    fn upcoming_skips_done_and_past_deadlines() {
        let tasks = vec![
            task("late", TaskStatus::Pending, -1, 0),
            task("done", TaskStatus::Done, 2, 0),
            task("soon", TaskStatus::InProgress, 1, 0),
            task("later", TaskStatus::Pending, 4, 0),
        ];
        assert_eq!(ids(&upcoming_deadlines(&tasks, now(), DIGEST_LIMIT)), ["soon", "later"]);
    }
}
