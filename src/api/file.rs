//! File endpoints under /file.

use reqwest::{multipart, Method};

use super::client::{ApiClient, ApiResult};
use super::types::{FileData, SearchResult, UsageStats};

/// Multipart field the server reads the upload from.
pub const UPLOAD_FIELD: &str = "uploadFile";

/// Upload a file.
///
/// POST /file with multipart form data. The part carries `file_name` and the
/// declared `content_type`.
pub async fn upload_file(
    client: &ApiClient,
    file_name: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> ApiResult<FileData> {
    let part = multipart::Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(content_type)?;

    let form = multipart::Form::new().part(UPLOAD_FIELD, part);

    client.post_multipart("/file", form).await
}

/// Total bytes stored by the current user.
///
/// GET /file/stats
pub async fn get_usage(client: &ApiClient) -> ApiResult<u64> {
    let stats: UsageStats = client.get("/file/stats").await?;
    Ok(stats.usage)
}

/// Search the current user's files, one page at a time.
///
/// GET /file/list/{page}?query={query}. A missing or empty query lists
/// everything.
pub async fn search_files(
    client: &ApiClient,
    page: u64,
    query: Option<&str>,
) -> ApiResult<SearchResult<FileData>> {
    client.get(&search_path(page, query)).await
}

pub(crate) fn search_path(page: u64, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => {
            format!("/file/list/{}?query={}", page, urlencoding::encode(q))
        }
        _ => format!("/file/list/{}", page),
    }
}

/// GET /file/{id}
pub async fn get_file(client: &ApiClient, file_id: &str) -> ApiResult<FileData> {
    client
        .get(&format!("/file/{}", urlencoding::encode(file_id)))
        .await
}

/// DELETE /file/{id}
pub async fn delete_file(client: &ApiClient, file_id: &str) -> ApiResult<()> {
    let path = format!("/file/{}", urlencoding::encode(file_id));
    client.execute(Method::DELETE, &path).await?;
    Ok(())
}
