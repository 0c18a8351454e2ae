use contracts::system::auth::SessionUser;

use super::storage::{clear_session, load_session, SessionStore};
use crate::shared::config::AppConfig;

/// Reads and changes the browser location
pub trait Navigator: Clone + Send + Sync + 'static {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("Redirect to {} failed: {:?}", path, e);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Route is on the allow-list, no session needed
    Public,
    Allowed(SessionUser),
    /// Sent to the login page; the page must not initialize
    Redirected,
}

/// Gate run once per page load
#[derive(Debug, Clone)]
pub struct AuthGuard<S: SessionStore, N: Navigator> {
    store: S,
    navigator: N,
    config: AppConfig,
}

impl<S: SessionStore, N: Navigator> AuthGuard<S, N> {
    pub fn new(store: S, navigator: N, config: &AppConfig) -> Self {
        Self {
            store,
            navigator,
            config: config.clone(),
        }
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.config.is_public_route(path)
    }

    /// True iff a non-empty token and a usable user record are stored
    pub fn is_authenticated(&self) -> bool {
        load_session(&self.store).is_some()
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        load_session(&self.store).map(|session| session.user)
    }

    /// Redirects to the login page when there is no session
    pub fn require_auth(&self) -> bool {
        if self.is_authenticated() {
            return true;
        }
        log::info!("Not authenticated, redirecting to login...");
        clear_session(&self.store);
        self.navigator.redirect(&self.config.login_path);
        false
    }

    pub fn check_page_load(&self) -> GuardDecision {
        let path = self.navigator.current_path();
        if self.is_public(&path) {
            return GuardDecision::Public;
        }
        if !self.require_auth() {
            return GuardDecision::Redirected;
        }
        match self.current_user() {
            Some(user) => GuardDecision::Allowed(user),
            None => GuardDecision::Redirected,
        }
    }
}
