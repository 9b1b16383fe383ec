//! Account endpoints under /user.

use reqwest::Method;

use super::client::{ApiClient, ApiResult};
use super::types::{
    MessageBody, MessageResponse, UpdateSettingsRequest, UpdateUserSettings, UserCreateRequest,
    UserData,
};

/// Get data about the current user.
///
/// GET /user
pub async fn get_user_data(client: &ApiClient) -> ApiResult<UserData> {
    client.get("/user").await
}

/// Create and log in to a new account.
///
/// POST /user. `registration_key` is required when the instance is invite only.
pub async fn user_create(
    client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
    registration_key: Option<&str>,
) -> ApiResult<UserData> {
    let body = UserCreateRequest {
        username,
        email,
        password,
        registration_key,
    };
    client.post("/user", &body).await
}

/// Update account settings, confirmed with the current password.
///
/// PUT /user/settings
pub async fn update_settings(
    client: &ApiClient,
    settings: &UpdateUserSettings,
    current_password: &str,
) -> ApiResult<UserData> {
    let body = UpdateSettingsRequest {
        settings,
        current_password,
    };
    client.put("/user/settings", &body).await
}

/// Verify the account email with the code that was mailed to it.
///
/// PATCH /user/verify/{code}
pub async fn verify(client: &ApiClient, code: &str) -> ApiResult<MessageResponse> {
    let path = format!("/user/verify/{}", urlencoding::encode(code));
    message_request(client, &path).await
}

/// Send a new verification email.
///
/// PATCH /user/verify/resend
pub async fn resend_code(client: &ApiClient) -> ApiResult<MessageResponse> {
    message_request(client, "/user/verify/resend").await
}

async fn message_request(client: &ApiClient, path: &str) -> ApiResult<MessageResponse> {
    let resp = client.execute(Method::PATCH, path).await?;
    let status = resp.status().as_u16();
    let bytes = resp.bytes().await?;

    // Body is informational only; tolerate empty or non-JSON payloads.
    let body = if bytes.is_empty() {
        MessageBody::default()
    } else {
        serde_json::from_slice::<MessageBody>(&bytes).unwrap_or_else(|e| {
            log::debug!("{} returned an unreadable message body: {}", path, e);
            MessageBody::default()
        })
    };
    Ok(MessageResponse::new(status, body))
}
