use taskboard_api::{ApiError, TaskId};
use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("No stored credential, redirected to login")]
    NotAuthenticated,

    #[error("Task {0} is not in the local collection")]
    TaskNotFound(TaskId),

    #[error("Browser storage error: {0}")]
    Storage(String),
}

impl DashboardError {
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }
}
