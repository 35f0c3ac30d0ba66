//! Page-level configuration overrides.
//!
//! The API base URL can be fixed at build time with the
//! `TASKBOARD_API_BASE_URL` environment variable, and overridden per page
//! with `<meta name="taskboard-api-base-url" content="...">`. The log filter
//! can be set with `<meta name="taskboard-log-level" content="debug">`.

use taskboard_core::DashboardConfig;

pub const API_BASE_URL_META: &str = "taskboard-api-base-url";
pub const LOG_LEVEL_META: &str = "taskboard-log-level";

pub fn load() -> DashboardConfig {
    let api_base_url = meta_content(API_BASE_URL_META)
        .or_else(|| option_env!("TASKBOARD_API_BASE_URL").map(str::to_string));

    DashboardConfig::builder()
        .maybe_api_base_url(api_base_url)
        .maybe_log_level(meta_content(LOG_LEVEL_META))
        .build()
}

fn meta_content(name: &str) -> Option<String> {
    gloo_utils::document()
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
