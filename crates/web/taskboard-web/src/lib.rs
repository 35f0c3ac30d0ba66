//! Browser entry point for the taskboard dashboard.
//!
//! Builds a [`Dashboard`] over the reqwest client and the browser window,
//! mounts the dominator views and kicks off the initial load.

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub mod chart;
pub mod config;
pub mod host;
pub mod logging;
mod styles;
mod views;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;

pub use host::BrowserHost;

use gloo_events::EventListener;
use std::future::Future;
use std::rc::Rc;
use taskboard_api::TaskApiClient;
use taskboard_core::{BearerToken, Dashboard, DashboardConfig, DashboardError, DashboardResult};
use tracing::{debug, error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

pub type App = Dashboard<TaskApiClient, BrowserHost>;

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    logging::init(&config.log_level);

    let app = match Dashboard::start(config, BrowserHost, connect) {
        Ok(app) => Rc::new(app),
        // Already on the way to the login page
        Err(DashboardError::NotAuthenticated) => return,
        Err(e) => {
            error!(error = %e, "Failed to start dashboard");
            return;
        }
    };
    info!(api = %app.config().api_base_url, "Starting dashboard");

    styles::install_globals();
    close_editor_on_escape(&app);
    dominator::append_dom(&dominator::body(), views::shell::render(&app));

    spawn_local(async move { app.load().await });
}

fn connect(config: &DashboardConfig, token: BearerToken) -> DashboardResult<TaskApiClient> {
    Ok(TaskApiClient::builder(config.api_base_url.as_str())
        .with_bearer_token(token.into_inner())
        .build()?)
}

fn close_editor_on_escape(app: &Rc<App>) {
    let app = Rc::clone(app);
    EventListener::new(&gloo_utils::document(), "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if is_escape && app.editor().is_some() {
            app.close_editor();
        }
    })
    .forget();
}

/// Run a user action in the background. Failures are already logged and
/// notified by the dashboard.
pub(crate) fn spawn_action<F>(action: &'static str, task: F)
where
    F: Future<Output = DashboardResult<()>> + 'static,
{
    spawn_local(async move {
        if let Err(e) = task.await {
            debug!(action, error = %e, "Action did not complete");
        }
    });
}
