//! Field state for the new-task form and the edit modal.

use futures_signals::signal::Mutable;
use taskboard_api::{NewTask, Priority, Task, TaskId, TaskStatus, TaskUpdate, parse_due_date};
use tracing::warn;

/// Values of the task form at one point in time.
///
/// `due_date` is the raw `<input type="date">` value, `YYYY-MM-DD` or empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: String,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            status: task.status,
            due_date: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    /// Request body for creating a task. An empty or unreadable due date is sent as `null`.
    pub fn to_new_task(&self) -> NewTask {
        let due_date = parse_due_date(&self.due_date).unwrap_or_else(|e| {
            warn!(value = %self.due_date, error = %e, "Ignoring unreadable due date");
            None
        });

        NewTask {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            status: self.status,
            due_date,
        }
    }

    /// Request body for saving the edit modal: every field is sent
    pub fn to_update(&self) -> TaskUpdate {
        self.to_new_task().into()
    }
}

/// Live form fields, bound two-way to the inputs.
pub struct TaskForm {
    pub title: Mutable<String>,
    pub description: Mutable<String>,
    pub priority: Mutable<Priority>,
    pub status: Mutable<TaskStatus>,
    pub due_date: Mutable<String>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskForm {
    pub fn new() -> Self {
        Self {
            title: Mutable::new(String::new()),
            description: Mutable::new(String::new()),
            priority: Mutable::new(Priority::default()),
            status: Mutable::new(TaskStatus::default()),
            due_date: Mutable::new(String::new()),
        }
    }

    pub fn from_draft(draft: TaskDraft) -> Self {
        let form = Self::new();
        form.load(draft);
        form
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.get_cloned(),
            description: self.description.get_cloned(),
            priority: self.priority.get(),
            status: self.status.get(),
            due_date: self.due_date.get_cloned(),
        }
    }

    pub fn load(&self, draft: TaskDraft) {
        self.title.set(draft.title);
        self.description.set(draft.description);
        self.priority.set(draft.priority);
        self.status.set(draft.status);
        self.due_date.set(draft.due_date);
    }

    pub fn reset(&self) {
        self.load(TaskDraft::default());
    }
}

/// The task currently open in the edit modal
pub struct EditSession {
    pub id: TaskId,
    pub form: TaskForm,
}

impl EditSession {
    pub fn new(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            form: TaskForm::from_draft(TaskDraft::from_task(task)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::titled;
    use chrono::NaiveDate;

    #[test]
    fn test_edit_session_prefills_from_task() {
        let mut task = titled("9", "Review PR", None);
        task.priority = Priority::Low;
        task.status = TaskStatus::Completed;
        task.due_date = NaiveDate::from_ymd_opt(2024, 12, 24);

        let session = EditSession::new(&task);
        assert_eq!(session.id.as_str(), "9");
        assert_eq!(
            session.form.draft(),
            TaskDraft {
                title: "Review PR".into(),
                description: String::new(),
                priority: Priority::Low,
                status: TaskStatus::Completed,
                due_date: "2024-12-24".into(),
            }
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let form = TaskForm::new();
        form.title.set("Something".into());
        form.priority.set(Priority::High);
        form.reset();
        assert_eq!(form.draft(), TaskDraft::default());
        assert_eq!(form.draft().priority, Priority::Medium);
        assert_eq!(form.draft().status, TaskStatus::Pending);
    }

    #[test]
    fn test_empty_due_date_becomes_null() {
        let draft = TaskDraft {
            title: "No deadline".into(),
            ..TaskDraft::default()
        };
        assert_eq!(draft.to_new_task().due_date, None);

        let draft = TaskDraft {
            due_date: "31/12/2024".into(),
            ..draft
        };
        assert_eq!(draft.to_new_task().due_date, None);
    }

    #[test]
    fn test_update_carries_every_field() {
        let draft = TaskDraft {
            title: "T".into(),
            description: "D".into(),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            due_date: "2025-03-01".into(),
        };
        let update = draft.to_update();
        assert_eq!(update.title.as_deref(), Some("T"));
        assert_eq!(update.description.as_deref(), Some("D"));
        assert_eq!(update.priority, Some(Priority::High));
        assert_eq!(update.status, Some(TaskStatus::InProgress));
        assert_eq!(update.due_date, Some(NaiveDate::from_ymd_opt(2025, 3, 1)));
    }
}
