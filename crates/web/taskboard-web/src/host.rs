//! [`Host`] backed by the browser window.

use futures::future::LocalBoxFuture;
use std::time::Duration;
use taskboard_core::{DashboardError, DashboardResult, Host};
use tracing::{error, warn};
use web_sys::Storage;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl BrowserHost {
    fn local_storage() -> Option<Storage> {
        gloo_utils::window().local_storage().ok().flatten()
    }
}

impl Host for BrowserHost {
    fn storage_get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn storage_set(&self, key: &str, value: &str) -> DashboardResult<()> {
        let storage = Self::local_storage()
            .ok_or_else(|| DashboardError::storage("localStorage is not available"))?;
        storage
            .set_item(key, value)
            .map_err(|e| DashboardError::storage(format!("{:?}", e)))
    }

    fn storage_remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.remove_item(key) {
                warn!(key, error = ?e, "Failed to remove storage entry");
            }
        }
    }

    fn redirect(&self, route: &str) {
        if let Err(e) = gloo_utils::window().location().set_href(route) {
            error!(route, error = ?e, "Navigation failed");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        gloo_utils::window()
            .confirm_with_message(message)
            .unwrap_or_else(|e| {
                warn!(error = ?e, "Confirmation dialog unavailable");
                false
            })
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        // The timeout is registered here, not on first poll
        Box::pin(gloo_timers::future::sleep(duration))
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
