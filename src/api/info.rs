use super::client::{ApiClient, ApiResult};
use super::types::AppInfo;

/// Static server metadata: name, theme, feature flags and version.
///
/// GET /info
pub async fn get_app_info(client: &ApiClient) -> ApiResult<AppInfo> {
    client.get("/info").await
}
