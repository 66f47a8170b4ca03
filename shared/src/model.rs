use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;

/// Server-assigned task identifier. Opaque to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    /// Label used on the wire and in the UI.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "In Progress" | "InProgress" => Ok(TaskStatus::InProgress),
            "Done" => Ok(TaskStatus::Done),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub assigned_to: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// `createdAt <= updatedAt`; the server is expected to keep this.
    pub fn timestamps_consistent(&self) -> bool {
        self.created_at <= self.updated_at
    }
}

/// Validated payload for create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFormData {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub assigned_to: String,
    pub status: TaskStatus,
}

impl From<&Task> for TaskFormData {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            deadline: task.deadline,
            assigned_to: task.assigned_to.clone(),
            status: task.status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Deadline,
    AssignedTo,
}

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Deadline => "deadline",
            FormField::AssignedTo => "assignedTo",
        }
    }
}

/// Per-field validation messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<FormField, &'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    pub fn clear(&mut self, field: FormField) {
        self.fields.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.fields.insert(field, message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid task form")?;
        for (i, (field, message)) in self.fields.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{sep}{}: {message}", field.name())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw task form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub assigned_to: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    /// Blank form with the deadline one week out.
    pub fn default_for(now: DateTime<Utc>) -> Self {
        Self {
            deadline: dates::iso_date(&(now + Duration::days(7))),
            ..Self::default()
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            deadline: dates::iso_date(&task.deadline),
            assigned_to: task.assigned_to.clone(),
            status: task.status,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Deadline => &self.deadline,
            FormField::AssignedTo => &self.assigned_to,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Deadline => self.deadline = value,
            FormField::AssignedTo => self.assigned_to = value,
        }
    }

    pub fn validate(&self) -> Result<TaskFormData, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.insert(FormField::Description, "Description is required");
        }
        let deadline = if self.deadline.trim().is_empty() {
            errors.insert(FormField::Deadline, "Deadline is required");
            None
        } else {
            let parsed = dates::parse_timestamp(self.deadline.trim());
            if parsed.is_none() {
                errors.insert(FormField::Deadline, "Invalid date format");
            }
            parsed
        };
        if self.assigned_to.trim().is_empty() {
            errors.insert(FormField::AssignedTo, "Assignee is required");
        }

        match deadline {
            Some(deadline) if errors.is_empty() => Ok(TaskFormData {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                deadline,
                assigned_to: self.assigned_to.trim().to_string(),
                status: self.status,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Done => stats.completed += 1,
            }
            stats
        })
    }

    pub fn is_consistent(&self) -> bool {
        self.pending + self.in_progress + self.completed == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: String,
}

impl User {
    /// Fallback avatar letter when no picture is set.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

/// Body of the session-check endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionPayload {
    pub user: User,
}
