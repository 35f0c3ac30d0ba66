//! Dashboard configuration

use bon::Builder;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_ROOT_ROUTE: &str = "/";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_USER_KEY: &str = "user";

/// How long a transient notification takes to appear, stays, and fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct NotificationTimings {
    /// Delay before the slide-in starts
    #[builder(default = Duration::from_millis(10))]
    pub reveal_after: Duration,

    /// Time spent fully visible
    #[builder(default = Duration::from_millis(3000))]
    pub visible_for: Duration,

    /// Slide-out duration before the element is removed
    #[builder(default = Duration::from_millis(300))]
    pub fade_for: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl NotificationTimings {
    /// Offsets from the moment of showing at which the notification is
    /// revealed, starts to leave, and is removed.
    pub fn deadlines(&self) -> [Duration; 3] {
        let reveal = self.reveal_after;
        let expire = reveal + self.visible_for;
        [reveal, expire, expire + self.fade_for]
    }
}

/// Everything the dashboard needs to know about its surroundings.
#[derive(Debug, Clone, Builder)]
pub struct DashboardConfig {
    /// Root of the REST API, without trailing `/tasks` or `/user`
    #[builder(into, default = DEFAULT_API_BASE_URL.to_string())]
    pub api_base_url: String,

    /// Where to send visitors without a stored token
    #[builder(into, default = DEFAULT_LOGIN_ROUTE.to_string())]
    pub login_route: String,

    /// Where to go after logging out
    #[builder(into, default = DEFAULT_ROOT_ROUTE.to_string())]
    pub root_route: String,

    /// Local storage key holding the bearer token
    #[builder(into, default = DEFAULT_TOKEN_KEY.to_string())]
    pub token_key: String,

    /// Local storage key holding the cached user identity
    #[builder(into, default = DEFAULT_USER_KEY.to_string())]
    pub user_key: String,

    /// `tracing` filter directive, e.g. `info` or `taskboard_core=debug`
    #[builder(into, default = "info".to_string())]
    pub log_level: String,

    #[builder(default)]
    pub notifications: NotificationTimings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
