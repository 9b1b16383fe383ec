//! HTTP client with session cookie storage and optional bearer auth.
//!
//! The Backpack server authenticates browsers through an `httponly` cookie set
//! on login, and API consumers through an application bearer token. The
//! client keeps a cookie jar for the former and attaches the latter to every
//! request when set.

use reqwest::{multipart, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::config::ClientConfig;

/// Result of every API call: transport failures are surfaced unchanged.
pub type ApiResult<T> = Result<T, reqwest::Error>;

/// HTTP client wrapper for Backpack API communication.
///
/// Holds the resolved base URL and the optional bearer token. Cheap to share
/// behind an `Arc`; all methods take `&self`.
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a new API client for the given configuration.
    ///
    /// Fails if the TLS backend cannot be initialised. There is no fallback
    /// client: one without a cookie store would silently lose the session.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(concat!("backpack-client/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            access_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store an application token for authenticated requests.
    pub async fn set_access_token(&self, token: String) {
        let mut guard = self.access_token.write().await;
        *guard = Some(token);
    }

    /// Clear the application token.
    pub async fn clear_access_token(&self) {
        let mut guard = self.access_token.write().await;
        *guard = None;
    }

    /// Absolute URL for a path relative to the API root.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        log::debug!("{} {}", method, path);
        let mut builder = self.client.request(method, self.url(path));

        if let Some(ref t) = *self.access_token.read().await {
            builder = builder.bearer_auth(t);
        }

        builder
    }

    /// Send a request and turn non-2xx statuses into errors.
    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            log::warn!("{} -> {}", resp.url().path(), status);
        }
        resp.error_for_status()
    }

    /// Send a GET request and decode the JSON response body.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let builder = self.request(Method::GET, path).await;
        self.send(builder).await?.json().await
    }

    /// Send a POST request with a JSON body and decode the JSON response.
    pub async fn post<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<R> {
        let builder = self.request(Method::POST, path).await.json(body);
        self.send(builder).await?.json().await
    }

    /// Send a PUT request with a JSON body and decode the JSON response.
    pub async fn put<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<R> {
        let builder = self.request(Method::PUT, path).await.json(body);
        self.send(builder).await?.json().await
    }

    /// Send a multipart POST request and decode the JSON response.
    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> ApiResult<R> {
        let builder = self.request(Method::POST, path).await.multipart(form);
        self.send(builder).await?.json().await
    }

    /// Send a body-less request and return the raw response once its status
    /// has been checked. Used for endpoints whose body is empty or untyped.
    pub async fn execute(&self, method: Method, path: &str) -> ApiResult<Response> {
        let builder = self.request(method, path).await;
        self.send(builder).await
    }
}
