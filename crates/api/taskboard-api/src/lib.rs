//! Client side of the taskboard REST API.
//!
//! This crate provides the wire types exchanged with the task server and a
//! `reqwest` based client that works both natively and in the browser:
//!
//! - `GET /user` - the signed-in user's profile
//! - `GET /tasks` - the user's tasks, in display order
//! - `POST /tasks` - create a task
//! - `PUT /tasks/{id}` - update some or all fields of a task
//! - `DELETE /tasks/{id}` - delete a task
//!
//! Every request carries the stored bearer token. Any non-2xx response is a
//! failure; status codes are kept on the error for diagnostics only.
//!
//! # Examples
//!
//! ```rust,no_run
//! use taskboard_api::{TaskApi, TaskApiClient};
//!
//! # async fn run() -> Result<(), taskboard_api::ApiError> {
//! let client = TaskApiClient::builder("http://localhost:8080/api")
//!     .with_bearer_token("token-from-login")
//!     .build()?;
//!
//! for task in client.list_tasks().await? {
//!     println!("{} [{}]", task.title, task.status.as_str());
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

pub mod client;
pub mod error;
pub mod types;

pub use client::{TaskApiClient, TaskApiClientBuilder};
pub use error::{ApiError, ApiResult};
pub use types::{NewTask, Priority, Task, TaskId, TaskStatus, TaskUpdate, User, parse_due_date};

/// Operations the dashboard needs from the task server.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /user`
    async fn current_user(&self) -> ApiResult<User>;

    /// `GET /tasks`
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// `POST /tasks`, returning the record the server stored
    async fn create_task(&self, task: &NewTask) -> ApiResult<Task>;

    /// `PUT /tasks/{id}`, returning the updated record
    async fn update_task(&self, id: &TaskId, update: &TaskUpdate) -> ApiResult<Task>;

    /// `DELETE /tasks/{id}`
    async fn delete_task(&self, id: &TaskId) -> ApiResult<()>;
}
