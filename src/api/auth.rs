//! Session endpoints under /auth.
//!
//! The server answers a successful login with an `httponly` auth cookie; the
//! client's cookie jar replays it on later requests until `logout` clears it.

use reqwest::Method;

use super::client::{ApiClient, ApiResult};
use super::types::{PasswordLoginRequest, UserData};

/// Log in with password authentication.
///
/// POST /auth/basic. `auth` is the account email (or username).
pub async fn password_login(client: &ApiClient, auth: &str, password: &str) -> ApiResult<UserData> {
    client
        .post("/auth/basic", &PasswordLoginRequest { auth, password })
        .await
}

/// Log out of the service. The server deletes the auth cookie.
///
/// POST /auth/logout
pub async fn logout(client: &ApiClient) -> ApiResult<()> {
    client.execute(Method::POST, "/auth/logout").await?;
    Ok(())
}
