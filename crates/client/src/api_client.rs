//! HTTP API client for the chatbot backend.

use async_trait::async_trait;
use botdeck_shared::{ApiError, Chatbot};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::operations::ChatbotGateway;

/// HTTP client for the `/api/chatbots` collection.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client issuing same-origin requests.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Make a GET request and decode the JSON response
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// Make a POST request with no body, discarding any response body
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        Ok(())
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        Ok(())
    }

    // --- Chatbot API methods ---

    /// List all chatbots visible to the current user
    pub async fn list_chatbots(&self) -> Result<Vec<Chatbot>, ApiError> {
        self.get_json("/api/chatbots").await
    }

    /// Fetch a single chatbot by id
    pub async fn get_chatbot(&self, chatbot_id: &str) -> Result<Chatbot, ApiError> {
        self.get_json(&format!("/api/chatbots/{}", chatbot_id)).await
    }
}

#[async_trait(?Send)]
impl ChatbotGateway for ApiClient {
    async fn delete_chatbot(&self, chatbot_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/chatbots/{}", chatbot_id)).await
    }

    async fn publish_chatbot(&self, chatbot_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/chatbots/{}/publish", chatbot_id))
            .await
    }
}

/// Base URL for the chatbot API.
///
/// On the web the client talks to its own origin; on desktop the backend
/// host comes from `BOTDECK_API_URL`.
pub fn api_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("BOTDECK_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_relative_without_base() {
        let client = ApiClient::new();
        assert_eq!(client.url("/api/chatbots"), "/api/chatbots");
        assert_eq!(client.url("api/chatbots"), "/api/chatbots");
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        let client = ApiClient::new().with_base_url("http://localhost:8080/");
        assert_eq!(
            client.url("/api/chatbots/abc123"),
            "http://localhost:8080/api/chatbots/abc123"
        );
    }

    #[test]
    fn url_passes_absolute_urls_through() {
        let client = ApiClient::new().with_base_url("http://localhost:8080");
        assert_eq!(
            client.url("https://example.com/api/chatbots"),
            "https://example.com/api/chatbots"
        );
    }
}
