//! Application (API credential) endpoints under /applications.

use reqwest::Method;

use super::client::{ApiClient, ApiResult};
use super::types::{ApplicationCreateRequest, ApplicationData, ApplicationToken};

fn application_path(application_id: &str) -> String {
    format!("/applications/{}", urlencoding::encode(application_id))
}

/// GET /applications
pub async fn get_all_applications(client: &ApiClient) -> ApiResult<Vec<ApplicationData>> {
    client.get("/applications").await
}

/// GET /applications/{id}
pub async fn get_application(
    client: &ApiClient,
    application_id: &str,
) -> ApiResult<ApplicationData> {
    client.get(&application_path(application_id)).await
}

/// Fetch the bearer token for an application.
///
/// GET /applications/{id}/token
pub async fn get_application_token(client: &ApiClient, application_id: &str) -> ApiResult<String> {
    let path = format!("{}/token", application_path(application_id));
    let resp: ApplicationToken = client.get(&path).await?;
    Ok(resp.token)
}

/// POST /applications
pub async fn application_create(client: &ApiClient, name: &str) -> ApiResult<ApplicationData> {
    client
        .post("/applications", &ApplicationCreateRequest { name })
        .await
}

/// DELETE /applications/{id}
pub async fn delete_application(client: &ApiClient, application_id: &str) -> ApiResult<()> {
    client
        .execute(Method::DELETE, &application_path(application_id))
        .await?;
    Ok(())
}
