//! Session guard: presence of the stored bearer token, logout, and the cached
//! user identity.
//!
//! The token is opaque. It is never parsed, validated or refreshed here; a
//! stale token only shows up as failing API calls.

use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::host::Host;
use std::fmt;
use taskboard_api::User;
use tracing::{debug, info, warn};

/// Stored bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

#[derive(Debug, Clone)]
pub struct SessionGuard {
    token_key: String,
    user_key: String,
    login_route: String,
    root_route: String,
}

impl SessionGuard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            token_key: config.token_key.clone(),
            user_key: config.user_key.clone(),
            login_route: config.login_route.clone(),
            root_route: config.root_route.clone(),
        }
    }

    /// Return the stored token, or redirect to the login route when there is none.
    pub fn check<H: Host>(&self, host: &H) -> DashboardResult<BearerToken> {
        match host.storage_get(&self.token_key) {
            Some(token) if !token.is_empty() => Ok(BearerToken(token)),
            _ => {
                info!(route = %self.login_route, "No stored credential, redirecting to login");
                host.redirect(&self.login_route);
                Err(DashboardError::NotAuthenticated)
            }
        }
    }

    /// Forget the credential and the cached identity, then leave for the root route.
    pub fn logout<H: Host>(&self, host: &H) {
        host.storage_remove(&self.token_key);
        host.storage_remove(&self.user_key);
        info!("Logged out");
        host.redirect(&self.root_route);
    }

    /// Identity cached by the login page or a previous profile fetch.
    pub fn cached_user<H: Host>(&self, host: &H) -> Option<User> {
        let raw = host.storage_get(&self.user_key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "Ignoring unreadable cached identity");
                None
            }
        }
    }

    pub fn cache_user<H: Host>(&self, host: &H, user: &User) {
        let result = serde_json::to_string(user)
            .map_err(|e| DashboardError::storage(e.to_string()))
            .and_then(|raw| host.storage_set(&self.user_key, &raw));
        if let Err(e) = result {
            warn!(error = %e, "Failed to cache user identity");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::LocalBoxFuture;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Duration;

    #[derive(Default)]
    struct PageHost {
        storage: RefCell<HashMap<String, String>>,
        redirects: RefCell<Vec<String>>,
    }

    impl Host for PageHost {
        fn storage_get(&self, key: &str) -> Option<String> {
            self.storage.borrow().get(key).cloned()
        }

        fn storage_set(&self, key: &str, value: &str) -> DashboardResult<()> {
            self.storage
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn storage_remove(&self, key: &str) {
            self.storage.borrow_mut().remove(key);
        }

        fn redirect(&self, route: &str) {
            self.redirects.borrow_mut().push(route.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            true
        }

        fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
            Box::pin(async {})
        }

        fn spawn(&self, _task: LocalBoxFuture<'static, ()>) {}
    }

    fn guard() -> SessionGuard {
        SessionGuard::new(&DashboardConfig::default())
    }

    #[test]
    fn test_missing_token_redirects_to_login() {
        let host = PageHost::default();
        assert!(matches!(
            guard().check(&host),
            Err(DashboardError::NotAuthenticated)
        ));
        assert_eq!(*host.redirects.borrow(), ["/login"]);
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let host = PageHost::default();
        host.storage_set("token", "").unwrap();
        assert!(guard().check(&host).is_err());
        assert_eq!(host.redirects.borrow().len(), 1);
    }

    #[test]
    fn test_stored_token_is_returned_verbatim() {
        let host = PageHost::default();
        host.storage_set("token", "eyJhbGciOi.opaque.value").unwrap();

        let token = guard().check(&host).unwrap();
        assert_eq!(token.as_str(), "eyJhbGciOi.opaque.value");
        assert_eq!(format!("{:?}", token), "BearerToken(***)");
        assert!(host.redirects.borrow().is_empty());
    }

    #[test]
    fn test_logout_clears_session_and_goes_home() {
        let host = PageHost::default();
        host.storage_set("token", "abc").unwrap();
        host.storage_set("user", r#"{"username":"ada","email":"a@b.c"}"#)
            .unwrap();
        host.storage_set("theme", "dark").unwrap();

        guard().logout(&host);

        assert_eq!(host.storage_get("token"), None);
        assert_eq!(host.storage_get("user"), None);
        assert_eq!(host.storage_get("theme").as_deref(), Some("dark"));
        assert_eq!(*host.redirects.borrow(), ["/"]);
    }

    #[test]
    fn test_cached_user_round_trip() {
        let host = PageHost::default();
        assert_eq!(guard().cached_user(&host), None);

        host.storage_set("user", "not json").unwrap();
        assert_eq!(guard().cached_user(&host), None);

        let user = User {
            username: "ada".into(),
            email: "ada@example.com".into(),
            created_at: None,
        };
        guard().cache_user(&host, &user);
        assert_eq!(guard().cached_user(&host), Some(user));
    }
}
