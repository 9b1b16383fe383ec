//! Request and response types for the Backpack API.
//!
//! All structs use camelCase serialization to match the API's JSON format.
//! Timestamps arrive as RFC 3339 strings and are parsed into `DateTime<Utc>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// Accent color configured for the instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Cyan,
    Purple,
    Pink,
}

/// Server metadata from GET /info.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub app_name: String,
    pub app_description: String,
    /// Whether email verification is enabled.
    pub smtp: bool,
    pub color: ThemeColor,
    /// Whether registration requires a registration key.
    pub invite_only: bool,
    pub git_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// A user account as returned by /user and /auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub verified: bool,
    pub role: UserRole,
}

/// An uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub id: String,
    /// ID of the uploading user.
    pub uploader: String,
    /// Name the file is stored under.
    pub name: String,
    /// Name the file was uploaded with.
    pub original_name: String,
    pub url: String,
    /// Only present for image uploads.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub hash: String,
    pub uploaded: DateTime<Utc>,
    /// Size in bytes.
    pub size: u64,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult<T> {
    pub page: u64,
    pub pages: u64,
    pub list: Vec<T>,
}

/// Partial update for PUT /user/settings. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Request body for PUT /user/settings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest<'a> {
    #[serde(flatten)]
    pub settings: &'a UpdateUserSettings,
    pub current_password: &'a str,
}

/// Request body for POST /auth/basic.
#[derive(Debug, Serialize)]
pub struct PasswordLoginRequest<'a> {
    /// Email or username.
    pub auth: &'a str,
    pub password: &'a str,
}

/// Request body for POST /user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_key: Option<&'a str>,
}

/// An API credential owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationData {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub last_accessed: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Request body for POST /applications.
#[derive(Debug, Serialize)]
pub struct ApplicationCreateRequest<'a> {
    pub name: &'a str,
}

/// Response from GET /applications/{id}/token.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationToken {
    pub token: String,
}

/// Response from GET /file/stats.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageStats {
    /// Total bytes used by the current user.
    pub usage: u64,
}

/// Body of the server's standard message response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Response of endpoints that only acknowledge (email verification).
#[derive(Debug, Clone, PartialEq)]
pub struct MessageResponse {
    /// HTTP status code.
    pub status: u16,
    pub message: String,
    pub error: Option<String>,
    pub data: Option<serde_json::Value>,
}

impl MessageResponse {
    pub fn new(status: u16, body: MessageBody) -> Self {
        Self {
            status,
            message: body.message,
            error: body.error,
            data: body.data,
        }
    }
}
