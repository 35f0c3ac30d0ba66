//! Which subset of the collection the task list shows.
//!
//! A status filter and a search term never apply together: choosing one
//! replaces the other.

use taskboard_api::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(TaskStatus::Pending),
        StatusFilter::Only(TaskStatus::InProgress),
        StatusFilter::Only(TaskStatus::Completed),
    ];

    /// Value of the filter control's `data-filter` attribute
    pub fn key(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(StatusFilter::All),
            other => TaskStatus::parse(other).map(StatusFilter::Only),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(TaskStatus::Pending) => "Pending",
            StatusFilter::Only(TaskStatus::InProgress) => "In Progress",
            StatusFilter::Only(TaskStatus::Completed) => "Completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status == status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    Filter(StatusFilter),
    /// Stored lowercased
    Search(String),
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery::Filter(StatusFilter::All)
    }
}

impl ListQuery {
    pub fn search(term: &str) -> Self {
        ListQuery::Search(term.to_lowercase())
    }

    /// The status filter in force, if the list is filtered rather than searched
    pub fn filter(&self) -> Option<StatusFilter> {
        match self {
            ListQuery::Filter(filter) => Some(*filter),
            ListQuery::Search(_) => None,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            ListQuery::Filter(filter) => filter.matches(task),
            ListQuery::Search(term) => {
                task.title.to_lowercase().contains(term.as_str())
                    || task
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(term.as_str()))
            }
        }
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}
