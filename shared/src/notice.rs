use std::collections::VecDeque;

use crate::error::DashboardError;

/// Oldest notices are evicted beyond this many.
pub const MAX_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Transient user notifications, newest last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notices {
    queue: VecDeque<Notice>,
    next_id: u64,
    capacity: usize,
}

impl Default for Notices {
    fn default() -> Self {
        Self::with_capacity(MAX_NOTICES)
    }
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if self.queue.len() == self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message)
    }

    /// Pushes the user-facing text of a failed operation.
    pub fn failure(&mut self, err: &DashboardError, context: &str) -> u64 {
        self.error(err.describe(context))
    }

    /// Returns whether a notice with `id` was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.queue.len();
        self.queue.retain(|n| n.id != id);
        self.queue.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn ids_increase_and_dismiss_removes() {
        let mut notices = Notices::new();
        let a = notices.info("Generating PDF...");
        let b = notices.success("PDF report downloaded successfully");
        assert!(b > a);

        assert!(notices.dismiss(a));
        assert!(!notices.dismiss(a));
        let left: Vec<_> = notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(left, ["PDF report downloaded successfully"]);
    }

    #[test]
    fn bounded_queue_drops_oldest() {
        let mut notices = Notices::with_capacity(2);
        notices.info("one");
        notices.info("two");
        let three = notices.info("three");
        assert_eq!(notices.len(), 2);
        assert_eq!(notices.iter().next().map(|n| n.message.as_str()), Some("two"));
        assert_eq!(notices.iter().last().map(|n| n.id), Some(three));
    }

    #[test]
    fn failures_describe_the_error() {
        let mut notices = Notices::new();
        notices.failure(&ClientError::NotFound.into(), "Failed to load task");
        notices.failure(&ClientError::Status { status: 500 }.into(), "Failed to load task");
        let messages: Vec<_> = notices.iter().map(|n| (n.kind, n.message.as_str())).collect();
        assert_eq!(
            messages,
            [
                (NoticeKind::Error, "Task not found"),
                (NoticeKind::Error, "Failed to load task"),
            ]
        );
    }
}
