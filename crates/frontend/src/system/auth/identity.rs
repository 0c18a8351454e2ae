//! Identity provider (Firebase Authentication REST API)

use contracts::system::auth::{
    FirebaseErrorResponse, SecureTokenResponse, SignInWithPasswordRequest,
    SignInWithPasswordResponse,
};
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::shared::api::ApiError;

const SIGN_IN_URL: &str = "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";
const TOKEN_URL: &str = "https://securetoken.googleapis.com/v1/token";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The identity provider refused the credentials or the refresh token
    #[error("{0}")]
    Provider(String),
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The backend did not accept the ID token
    #[error("{0}")]
    Backend(String),
}

impl From<ApiError> for AuthError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Rejected(message) => AuthError::Backend(message),
            ApiError::Transport(message) => AuthError::Transport(message),
            ApiError::Decode(message) | ApiError::Encode(message) => AuthError::Decode(message),
        }
    }
}

/// ID token plus the refresh token that renews it
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderTokens {
    pub id_token: String,
    pub refresh_token: String,
}

#[allow(async_fn_in_trait)]
pub trait IdentityProvider: Clone + Send + Sync + 'static {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderTokens, AuthError>;
    async fn refresh(&self, refresh_token: &str) -> Result<ProviderTokens, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;
}

#[derive(Debug, Clone)]
pub struct FirebaseIdentity {
    api_key: String,
}

impl FirebaseIdentity {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    fn keyed(&self, url: &str) -> Result<String, AuthError> {
        if self.api_key.is_empty() {
            return Err(AuthError::Provider(
                "Firebase API key is not configured".to_string(),
            ));
        }
        Ok(format!("{}?key={}", url, urlencoding::encode(&self.api_key)))
    }
}

impl IdentityProvider for FirebaseIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderTokens, AuthError> {
        let request = SignInWithPasswordRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            return_secure_token: true,
        };

        let response = Request::post(&self.keyed(SIGN_IN_URL)?)
            .json(&request)
            .map_err(|e| AuthError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(provider_error(response).await);
        }

        let body = response
            .json::<SignInWithPasswordResponse>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        log::debug!("Signed in with the identity provider as {}", body.local_id);
        Ok(ProviderTokens {
            id_token: body.id_token,
            refresh_token: body.refresh_token,
        })
    }

    async fn refresh(&self, refresh_token: &str) -> Result<ProviderTokens, AuthError> {
        let form = format!(
            "grant_type=refresh_token&refresh_token={}",
            urlencoding::encode(refresh_token)
        );

        let response = Request::post(&self.keyed(TOKEN_URL)?)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| AuthError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(provider_error(response).await);
        }

        let body = response
            .json::<SecureTokenResponse>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(ProviderTokens {
            id_token: body.id_token,
            refresh_token: body.refresh_token,
        })
    }

    /// The REST API keeps no client session; dropping the stored tokens is
    /// the sign-out
    /// The REST API keeps no server-side session to revoke
    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

async fn provider_error(response: Response) -> AuthError {
    let status = response.status();
    match response.json::<FirebaseErrorResponse>().await {
        Ok(body) => AuthError::Provider(describe_provider_error(&body.error.message)),
        Err(_) => AuthError::Provider(format!("Authentication failed: {}", status)),
    }
}

/// User-facing text for the provider's error codes
pub fn describe_provider_error(code: &str) -> String {
    // Codes may carry a suffix: "TOO_MANY_ATTEMPTS_TRY_LATER : Access ..."
    let code = code.split(':').next().unwrap_or(code).trim();
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Invalid email or password".to_string()
        }
        "USER_DISABLED" => "This account has been disabled".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Please try again later.".to_string(),
        "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" => "Session expired, please sign in again".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_provider_error() {
        assert_eq!(
            describe_provider_error("INVALID_LOGIN_CREDENTIALS"),
            "Invalid email or password"
        );
        assert_eq!(
            describe_provider_error("TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled"),
            "Too many attempts. Please try again later."
        );
        assert_eq!(describe_provider_error("OPERATION_NOT_ALLOWED"), "OPERATION_NOT_ALLOWED");
    }

    #[test]
    fn test_backend_rejection_maps_to_backend_error() {
        let error: AuthError =
            ApiError::Rejected("Invalid credentials or user not registered".into()).into();
        assert_eq!(
            error,
            AuthError::Backend("Invalid credentials or user not registered".to_string())
        );
    }
}
