use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

/// Body of `POST /auth/login`: exchanges a provider ID token for the user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub id_token: String,
}

/// User record persisted as `user_data` after login
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub user_id: Option<EntityId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl SessionUser {
    /// Name shown in the navbar: full name, falling back to the username
    pub fn display_name(&self) -> &str {
        [self.full_name.as_deref(), self.username.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or("")
    }

    /// A stored record is usable only when it names the user somehow
    pub fn is_identified(&self) -> bool {
        !self.display_name().is_empty()
    }
}

// ============================================================================
// Firebase REST
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInWithPasswordRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInWithPasswordResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub local_id: String,
    pub email: Option<String>,
    pub expires_in: String,
}

/// Response of the secure token endpoint (snake_case on the wire)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecureTokenResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseErrorResponse {
    pub error: FirebaseErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseErrorBody {
    pub code: u16,
    pub message: String,
}
