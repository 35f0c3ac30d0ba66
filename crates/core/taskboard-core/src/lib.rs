//! Browser-independent core of the taskboard dashboard.
//!
//! Everything here compiles and is tested natively; the web crate only adds
//! a [`Host`] backed by `window` and the dominator views on top of the
//! signals exposed by [`Dashboard`].
//!
//! - [`session`] - stored-token guard, logout, cached identity
//! - [`store`] - the ordered in-memory task collection
//! - [`render`] - typed view-models for task cards, the task container and the profile
//! - [`stats`] - status counts and donut chart geometry
//! - [`query`] - status filter / search over the collection
//! - [`navigation`] - dashboard sections and their titles
//! - [`notify`] - transient notifications with an explicit lifecycle
//! - [`form`] - new-task form and edit modal state
//! - [`dashboard`] - the controller tying it together

pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod host;
pub mod navigation;
pub mod notify;
pub mod query;
pub mod render;
pub mod session;
pub mod stats;
pub mod store;

pub use config::{DashboardConfig, NotificationTimings};
pub use dashboard::{DELETE_CONFIRMATION, Dashboard, messages};
pub use error::{DashboardError, DashboardResult};
pub use form::{EditSession, TaskDraft, TaskForm};
pub use host::Host;
pub use navigation::Section;
pub use notify::{Notification, NotificationId, NotificationKind, NotificationQueue, Phase};
pub use query::{ListQuery, StatusFilter};
pub use render::{ListState, ProfileView, TaskCardView, TaskContainerView, TaskListView};
pub use session::{BearerToken, SessionGuard};
pub use stats::{DonutChart, DonutSegment, TaskStats};
pub use store::TaskStore;

pub use taskboard_api as api;
