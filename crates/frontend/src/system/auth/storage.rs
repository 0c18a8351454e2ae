use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use contracts::system::auth::SessionUser;
use web_sys::window;

pub const TOKEN_KEY: &str = "firebase_token";
pub const USER_KEY: &str = "user_data";
pub const REFRESH_TOKEN_KEY: &str = "firebase_refresh_token";

/// Key/value persistence for the session credentials
pub trait SessionStore: Clone + Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SessionStore for LocalSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Reads the persisted session; `None` when the token or the user record is
/// missing, empty or unparseable
pub fn load_session(store: &impl SessionStore) -> Option<Session> {
    let token = store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
    let raw_user = store.get(USER_KEY)?;
    let user = match serde_json::from_str::<SessionUser>(&raw_user) {
        Ok(user) if user.is_identified() => user,
        Ok(_) => {
            log::warn!("Stored user record has no name");
            return None;
        }
        Err(e) => {
            log::warn!("Stored user record is not valid JSON: {}", e);
            return None;
        }
    };
    Some(Session { token, user })
}

pub fn save_session(store: &impl SessionStore, session: &Session) {
    store.set(TOKEN_KEY, &session.token);
    match serde_json::to_string(&session.user) {
        Ok(raw) => store.set(USER_KEY, &raw),
        Err(e) => log::error!("Failed to serialize user record: {}", e),
    }
}

pub fn save_refresh_token(store: &impl SessionStore, token: &str) {
    store.set(REFRESH_TOKEN_KEY, token);
}

pub fn get_refresh_token(store: &impl SessionStore) -> Option<String> {
    store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Clear all authentication state
pub fn clear_session(store: &impl SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
    store.remove(REFRESH_TOKEN_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> SessionUser {
        SessionUser {
            username: Some(name.to_string()),
            ..SessionUser::default()
        }
    }

    #[test]
    fn test_save_and_load_session() {
        let store = MemorySessionStore::new();
        let session = Session {
            token: "id-token".to_string(),
            user: user("clerk"),
        };
        save_session(&store, &session);

        assert_eq!(load_session(&store), Some(session));
        assert!(store.get(USER_KEY).unwrap().contains("\"username\":\"clerk\""));
    }

    #[test]
    fn test_missing_or_invalid_state_is_not_a_session() {
        let store = MemorySessionStore::new();
        assert_eq!(load_session(&store), None);

        store.set(TOKEN_KEY, "id-token");
        assert_eq!(load_session(&store), None);

        store.set(USER_KEY, "{not json");
        assert_eq!(load_session(&store), None);

        store.set(USER_KEY, r#"{"user_id": 1}"#);
        assert_eq!(load_session(&store), None);

        store.set(USER_KEY, r#"{"full_name": "Ada Clerk"}"#);
        store.set(TOKEN_KEY, "  ");
        assert_eq!(load_session(&store), None);
    }

    #[test]
    fn test_clear_session_removes_every_key() {
        let store = MemorySessionStore::new();
        save_session(
            &store,
            &Session {
                token: "t".to_string(),
                user: user("clerk"),
            },
        );
        save_refresh_token(&store, "r");

        clear_session(&store);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
        assert_eq!(get_refresh_token(&store), None);
    }
}
