use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::login_with_backend;
use super::guard::Navigator;
use super::identity::{AuthError, FirebaseIdentity, IdentityProvider};
use super::storage::{
    clear_session, get_refresh_token, load_session, save_refresh_token, save_session,
    LocalSessionStore, Session, SessionStore, TOKEN_KEY,
};
use crate::shared::api::ApiClient;
use crate::shared::config::AppConfig;
use crate::shared::feedback::{AlertLevel, Notifier};

pub const LOGOUT_FAILED: &str = "Error logging out. Please try again.";

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub identity: StoredValue<FirebaseIdentity>,
}

/// Auth context provider component; also starts the token refresh loop
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in component tree");
    let identity = FirebaseIdentity::new(config.firebase_api_key.clone());

    let context = AuthContext {
        session: RwSignal::new(load_session(&LocalSessionStore)),
        identity: StoredValue::new(identity.clone()),
    };
    provide_context(context);

    spawn_refresh_loop(identity, LocalSessionStore, config.token_refresh_interval_ms);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No live session to refresh
    Skipped,
    Refreshed,
    Failed,
}

fn spawn_refresh_loop<I: IdentityProvider, S: SessionStore>(identity: I, store: S, interval_ms: u32) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            refresh_token(&identity, &store).await;
        }
    });
}

/// Mints a new ID token and persists it. Failures are logged only and leave
/// the session in place.
pub async fn refresh_token<I: IdentityProvider, S: SessionStore>(
    identity: &I,
    store: &S,
) -> RefreshOutcome {
    if load_session(store).is_none() {
        return RefreshOutcome::Skipped;
    }
    let Some(refresh) = get_refresh_token(store) else {
        log::debug!("No refresh token stored, skipping token refresh");
        return RefreshOutcome::Skipped;
    };

    match identity.refresh(&refresh).await {
        Ok(tokens) => {
            store.set(TOKEN_KEY, &tokens.id_token);
            save_refresh_token(store, &tokens.refresh_token);
            log::info!("Token refreshed");
            RefreshOutcome::Refreshed
        }
        Err(e) => {
            log::error!("Token refresh error: {}", e);
            RefreshOutcome::Failed
        }
    }
}

/// Provider sign-in, backend login, then the session is persisted
pub async fn login<I, A, S>(
    identity: &I,
    api: &A,
    store: &S,
    email: &str,
    password: &str,
) -> Result<Session, AuthError>
where
    I: IdentityProvider,
    A: ApiClient,
    S: SessionStore,
{
    let tokens = identity.sign_in(email, password).await?;

    // The backend reads the token from the body, not from the stored session
    let user = login_with_backend(api, &tokens.id_token).await?;
    let session = Session {
        token: tokens.id_token,
        user,
    };
    save_session(store, &session);
    save_refresh_token(store, &tokens.refresh_token);
    log::info!("Logged in as {}", session.user.display_name());
    Ok(session)
}

/// Best-effort logout: on failure the user is told and local state is kept
pub async fn logout<I, S, N, T>(
    identity: &I,
    store: &S,
    navigator: &N,
    notifier: &T,
    login_path: &str,
) -> Result<(), AuthError>
where
    I: IdentityProvider,
    S: SessionStore,
    N: Navigator,
    T: Notifier,
{
    match identity.sign_out().await {
        Ok(()) => {
            clear_session(store);
            navigator.redirect(login_path);
            Ok(())
        }
        Err(e) => {
            log::error!("Logout error: {}", e);
            notifier.notify(AlertLevel::Danger, LOGOUT_FAILED.to_string());
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::{Envelope, Method};
    use crate::shared::testing::{MockApi, RecordingNavigator, RecordingNotifier};
    use crate::system::auth::identity::ProviderTokens;
    use crate::system::auth::storage::{MemorySessionStore, REFRESH_TOKEN_KEY, USER_KEY};
    use futures::executor::block_on;
    use serde_json::json;

    #[derive(Clone, Default)]
    struct FakeIdentity {
        refuse: bool,
    }

    fn tokens(id: &str) -> ProviderTokens {
        ProviderTokens {
            id_token: format!("id-{}", id),
            refresh_token: format!("refresh-{}", id),
        }
    }

    impl IdentityProvider for FakeIdentity {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<ProviderTokens, AuthError> {
            if self.refuse {
                return Err(AuthError::Provider("Invalid email or password".into()));
            }
            Ok(tokens("1"))
        }

        async fn refresh(&self, _refresh_token: &str) -> Result<ProviderTokens, AuthError> {
            if self.refuse {
                return Err(AuthError::Transport("offline".into()));
            }
            Ok(tokens("2"))
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            if self.refuse {
                return Err(AuthError::Provider("network-request-failed".into()));
            }
            Ok(())
        }
    }

    fn logged_in_store() -> MemorySessionStore {
        let store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "id-1");
        store.set(USER_KEY, r#"{"username": "clerk"}"#);
        store.set(REFRESH_TOKEN_KEY, "refresh-1");
        store
    }

    #[test]
    fn test_login_persists_session() {
        let api = MockApi::new();
        api.respond(
            Method::Post,
            "/auth/login",
            Envelope::ok(json!({"user_id": 3, "username": "clerk", "full_name": "Ada Clerk", "role": "staff"})),
        );
        let store = MemorySessionStore::new();

        let session = block_on(login(&FakeIdentity::default(), &api, &store, "a@b.c", "pw")).unwrap();

        assert_eq!(session.token, "id-1");
        assert_eq!(api.requests()[0].body, Some(json!({"id_token": "id-1"})));
        assert_eq!(load_session(&store), Some(session));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("refresh-1"));
    }

    #[test]
    fn test_backend_rejection_stores_nothing() {
        let api = MockApi::new();
        api.respond(
            Method::Post,
            "/auth/login",
            Envelope::failure("Invalid credentials or user not registered"),
        );
        let store = MemorySessionStore::new();

        let result = block_on(login(&FakeIdentity::default(), &api, &store, "a@b.c", "pw"));
        assert_eq!(
            result,
            Err(AuthError::Backend("Invalid credentials or user not registered".into()))
        );
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_refresh_overwrites_token() {
        let store = logged_in_store();
        let outcome = block_on(refresh_token(&FakeIdentity::default(), &store));

        assert_eq!(outcome, RefreshOutcome::Refreshed);
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("id-2"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("refresh-2"));
    }

    #[test]
    fn test_refresh_failure_keeps_session() {
        let store = logged_in_store();
        let outcome = block_on(refresh_token(&FakeIdentity { refuse: true }, &store));

        assert_eq!(outcome, RefreshOutcome::Failed);
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("id-1"));
        assert!(load_session(&store).is_some());
    }

    #[test]
    fn test_refresh_without_session_is_skipped() {
        let store = MemorySessionStore::new();
        let outcome = block_on(refresh_token(&FakeIdentity::default(), &store));
        assert_eq!(outcome, RefreshOutcome::Skipped);
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let store = logged_in_store();
        let navigator = RecordingNavigator::at("/sales");
        let notifier = RecordingNotifier::new();

        block_on(logout(&FakeIdentity::default(), &store, &navigator, &notifier, "/login")).unwrap();

        assert_eq!(load_session(&store), None);
        assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn test_failed_logout_keeps_local_state() {
        let store = logged_in_store();
        let navigator = RecordingNavigator::at("/sales");
        let notifier = RecordingNotifier::new();

        let result = block_on(logout(&FakeIdentity { refuse: true }, &store, &navigator, &notifier, "/login"));

        assert!(result.is_err());
        assert!(load_session(&store).is_some());
        assert!(navigator.redirects().is_empty());
        assert_eq!(
            notifier.last(),
            Some((AlertLevel::Danger, LOGOUT_FAILED.to_string()))
        );
    }
}
