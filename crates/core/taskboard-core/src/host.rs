//! The seam between the dashboard and the page it runs in.

use crate::error::DashboardResult;
use futures::future::LocalBoxFuture;
use std::time::Duration;

/// Browser facilities the dashboard relies on.
///
/// The web crate implements this on top of `window`; tests use an in-memory
/// double.
pub trait Host {
    /// Read a string from persistent key/value storage
    fn storage_get(&self, key: &str) -> Option<String>;

    fn storage_set(&self, key: &str, value: &str) -> DashboardResult<()>;

    fn storage_remove(&self, key: &str);

    /// Leave the dashboard for another page
    fn redirect(&self, route: &str);

    /// Ask a yes/no question, blocking until answered
    fn confirm(&self, message: &str) -> bool;

    /// Future that resolves once `duration` has elapsed, measured from the
    /// call, not from the first poll
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;

    /// Run a future to completion in the background
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
