//! User task records
//!
//! Tasks assigned to human participants by running process instances. The
//! task board filters on status, priority, assignee, and process
//! definition, and shows the aggregate counts per status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::view::aggregate;
use crate::store::Record;

// ─────────────────────────────────────────────────────────────────
// Task Status
// ─────────────────────────────────────────────────────────────────

/// Lifecycle state of a user task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub fn slug(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
        }
    }

    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Overdue,
        ]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" | "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "overdue" => Ok(TaskStatus::Overdue),
            _ => Err(format!(
                "Unknown task status '{}'. Valid: pending, in_progress, completed, overdue",
                s
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// User Task
// ─────────────────────────────────────────────────────────────────

/// A task waiting on a human, owned by a process instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTask {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub process_instance_id: String,
    pub process_definition_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Default for UserTask {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: None,
            process_instance_id: String::new(),
            process_definition_key: String::new(),
            assignee: None,
            created: Utc::now(),
            due: None,
            priority: 50,
            status: TaskStatus::Pending,
        }
    }
}

impl UserTask {
    /// A task past its due date that is not finished counts as overdue.
    pub fn effective_status(&self, now: DateTime<Utc>) -> TaskStatus {
        match (self.status, self.due) {
            (TaskStatus::Pending | TaskStatus::InProgress, Some(due)) if due < now => {
                TaskStatus::Overdue
            }
            (status, _) => status,
        }
    }
}

impl Record for UserTask {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "status" => Some(self.status.slug().to_string()),
            "priority" => Some(self.priority.to_string()),
            "assignee" => self.assignee.clone(),
            "process_definition" => Some(self.process_definition_key.clone()),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Task Counts
// ─────────────────────────────────────────────────────────────────

/// Summary-card counts for the task board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
    pub total: usize,
}

impl TaskCounts {
    /// Bucket tasks by effective status. Counts always sum to the task
    /// count.
    pub fn from_tasks(tasks: &[UserTask], now: DateTime<Utc>) -> Self {
        let counts = aggregate(tasks, |t| t.effective_status(now).slug().to_string());
        Self {
            pending: counts.bucket("pending"),
            in_progress: counts.bucket("in_progress"),
            completed: counts.bucket("completed"),
            overdue: counts.bucket("overdue"),
            total: counts.total,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task(status: TaskStatus, due_offset_hours: Option<i64>) -> UserTask {
        let now = Utc::now();
        UserTask {
            name: "Review Request".to_string(),
            process_instance_id: "inst1".to_string(),
            process_definition_key: "approval".to_string(),
            status,
            due: due_offset_hours.map(|h| now + Duration::hours(h)),
            ..Default::default()
        }
    }

    #[test]
    fn test_effective_status_marks_overdue() {
        let now = Utc::now();
        assert_eq!(
            task(TaskStatus::Pending, Some(-2)).effective_status(now),
            TaskStatus::Overdue
        );
        assert_eq!(
            task(TaskStatus::Pending, Some(2)).effective_status(now),
            TaskStatus::Pending
        );
        // Completed tasks never become overdue
        assert_eq!(
            task(TaskStatus::Completed, Some(-2)).effective_status(now),
            TaskStatus::Completed
        );
    }

    #[test]
    fn test_counts_sum_to_total() {
        let now = Utc::now();
        let tasks = vec![
            task(TaskStatus::Pending, None),
            task(TaskStatus::Pending, Some(-1)),
            task(TaskStatus::InProgress, None),
            task(TaskStatus::Completed, None),
        ];

        let counts = TaskCounts::from_tasks(&tasks, now);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.completed, 1);
        assert_eq!(
            counts.pending + counts.in_progress + counts.completed + counts.overdue,
            counts.total
        );
    }

    #[test]
    fn test_task_status_from_str() {
        assert_eq!(
            "in_progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            "in-progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_filter_fields() {
        let t = task(TaskStatus::Pending, None);
        assert_eq!(t.field_text("status").as_deref(), Some("pending"));
        assert_eq!(t.field_text("process_definition").as_deref(), Some("approval"));
        assert_eq!(t.field_text("assignee"), None);
    }
}
