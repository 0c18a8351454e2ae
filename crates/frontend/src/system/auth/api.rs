use contracts::system::auth::{LoginRequest, SessionUser};

use super::identity::AuthError;
use crate::shared::api::{fetch_data, ApiClient, ApiRequest};

/// Exchanges a provider ID token for the backend's user record
pub async fn login_with_backend<A: ApiClient>(
    api: &A,
    id_token: &str,
) -> Result<SessionUser, AuthError> {
    let request = ApiRequest::post(
        "/auth/login",
        &LoginRequest {
            id_token: id_token.to_string(),
        },
    )?;
    let (user, _) = fetch_data::<SessionUser, A>(api, request).await?;
    Ok(user)
}
