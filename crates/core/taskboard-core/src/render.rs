//! Typed view-models for the task list and the profile.
//!
//! These are pure functions of their input. The DOM layer turns them into
//! elements and replaces the previous output wholesale on every change.

use chrono::{DateTime, NaiveDate, Utc};
use taskboard_api::{Priority, Task, TaskId, TaskStatus, User};

pub const NO_DESCRIPTION: &str = "No description provided.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load tasks. Please try again.";

pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

pub fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "PENDING",
        TaskStatus::InProgress => "IN PROGRESS",
        TaskStatus::Completed => "COMPLETED",
    }
}

/// Form option label, as opposed to the badge label
pub fn status_option_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "Pending",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::Completed => "Completed",
    }
}

/// Font Awesome icon name for a status badge
pub fn status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "clock",
        TaskStatus::InProgress => "spinner",
        TaskStatus::Completed => "check-circle",
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_date(timestamp.date_naive())
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskCardView {
    pub id: TaskId,
    pub title: String,
    /// `priority-<level>`, on both the card and its badge
    pub priority_class: String,
    pub priority_label: &'static str,
    pub description: String,
    pub has_description: bool,
    pub status: TaskStatus,
    /// `status-<status>`
    pub status_class: String,
    pub status_icon: &'static str,
    pub status_label: &'static str,
    pub due_label: Option<String>,
    pub created_label: String,
}

impl TaskCardView {
    pub fn new(task: &Task) -> Self {
        let (description, has_description) = match &task.description {
            Some(text) => (text.clone(), true),
            None => (NO_DESCRIPTION.to_string(), false),
        };

        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            priority_class: format!("priority-{}", task.priority.as_str()),
            priority_label: priority_label(task.priority),
            description,
            has_description,
            status: task.status,
            status_class: format!("status-{}", task.status.as_str()),
            status_icon: status_icon(task.status),
            status_label: status_label(task.status),
            due_label: task.due_date.map(|d| format!("Due: {}", format_date(d))),
            created_label: format!("Created: {}", format_timestamp(&task.created_at)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskListView {
    /// "No tasks found" placeholder with a create call-to-action
    Empty,
    Cards(Vec<TaskCardView>),
}

impl TaskListView {
    pub fn new(tasks: &[Task]) -> Self {
        if tasks.is_empty() {
            TaskListView::Empty
        } else {
            TaskListView::Cards(tasks.iter().map(TaskCardView::new).collect())
        }
    }

    pub fn cards(&self) -> &[TaskCardView] {
        match self {
            TaskListView::Empty => &[],
            TaskListView::Cards(cards) => cards,
        }
    }
}

/// Fetch state of the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// What the task container shows
#[derive(Debug, Clone, PartialEq)]
pub enum TaskContainerView {
    Loading,
    Error(&'static str),
    List(TaskListView),
}

impl TaskContainerView {
    pub fn new(state: ListState, visible_tasks: &[Task]) -> Self {
        match state {
            ListState::Loading => TaskContainerView::Loading,
            ListState::Failed => TaskContainerView::Error(LOAD_FAILED_MESSAGE),
            ListState::Ready => TaskContainerView::List(TaskListView::new(visible_tasks)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub username: String,
    pub email: String,
    pub member_since: Option<String>,
}

impl ProfileView {
    pub fn new(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            member_since: user.created_at.as_ref().map(format_timestamp),
        }
    }
}
