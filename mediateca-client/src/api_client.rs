use anyhow::Result;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for the catalog backend.
///
/// The base URL is resolved once from [`crate::config::Config`] and injected
/// here; nothing else in the crate touches ambient configuration.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_version: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            // In development, don't follow redirects to avoid HTTP->HTTPS issues
            .redirect(if cfg!(debug_assertions) {
                reqwest::redirect::Policy::none()
            } else {
                reqwest::redirect::Policy::default()
            })
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        log::info!("[ApiClient] Creating new API client with base URL: {base_url}");

        Self {
            client,
            base_url,
            api_version: "v1".to_string(),
        }
    }

    /// Build a versioned API URL
    pub fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/{}/{}", self.base_url, self.api_version, path)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a request and handle common errors
    async fn execute_request<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(response.json().await?),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow::anyhow!(
                    "Request failed with status {}: {}",
                    status,
                    error_text
                ))
            }
        }
    }

    /// Execute a request whose response body is ignored
    async fn execute_no_content(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow::anyhow!(
                    "Request failed with status {}: {}",
                    status,
                    error_text
                ))
            }
        }
    }

    /// GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] GET request to: {url}");
        self.execute_request(self.client.get(&url)).await
    }

    /// POST request
    pub async fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] POST request to: {url}");
        self.execute_request(self.client.post(&url).json(body)).await
    }

    /// PUT request
    pub async fn put<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] PUT request to: {url}");
        self.execute_request(self.client.put(&url).json(body)).await
    }

    /// DELETE request; the response body is ignored
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] DELETE request to: {url}");
        self.execute_no_content(self.client.delete(&url)).await
    }
}
