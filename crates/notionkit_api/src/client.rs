//! reqwest-backed Notion client.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use crate::api::{DatabaseQuery, NotionApi};
use crate::error::{ApiError, ApiResult};

/// Environment variable holding the integration token.
pub const TOKEN_ENV: &str = "NOTION_API_TOKEN";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "NOTION_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
/// Value of the `Notion-Version` header sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// HTTP client for the Notion API.
pub struct NotionClient {
    token: String,
    base_url: String,
    client: reqwest::Client,
}

impl NotionClient {
    /// Create a client for the default endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Create a client from `NOTION_API_TOKEN` and `NOTION_API_BASE_URL`.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_vars(
            std::env::var(TOKEN_ENV).ok(),
            std::env::var(BASE_URL_ENV).ok(),
        )
    }

    /// Create a client from already looked-up variable values.
    ///
    /// An absent or blank token is a [`ApiError::MissingCredential`].
    pub fn from_vars(token: Option<String>, base_url: Option<String>) -> ApiResult<Self> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApiError::MissingCredential)?;

        let client = Self::new(token);
        Ok(match base_url.filter(|u| !u.trim().is_empty()) {
            Some(url) => client.with_base_url(url),
            None => client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path such as `pages/<id>`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        let url = self.endpoint(path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &text));
        }

        debug!("Response {} ({} bytes)", status, text.len());
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl NotionApi for NotionClient {
    async fn create_page(&self, body: &Value) -> ApiResult<Value> {
        self.send(Method::POST, "pages", Some(body)).await
    }

    async fn create_database(&self, body: &Value) -> ApiResult<Value> {
        self.send(Method::POST, "databases", Some(body)).await
    }

    async fn update_page(&self, page_id: &str, properties: &Value) -> ApiResult<Value> {
        let body = json!({ "properties": properties });
        self.send(Method::PATCH, &format!("pages/{}", page_id), Some(&body))
            .await
    }

    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> ApiResult<Value> {
        let body = serde_json::to_value(query)?;
        self.send(
            Method::POST,
            &format!("databases/{}/query", database_id),
            Some(&body),
        )
        .await
    }

    async fn append_blocks(&self, block_id: &str, children: &Value) -> ApiResult<Value> {
        let body = json!({ "children": children });
        self.send(
            Method::PATCH,
            &format!("blocks/{}/children", block_id),
            Some(&body),
        )
        .await
    }

    async fn retrieve_page(&self, page_id: &str) -> ApiResult<Value> {
        self.send(Method::GET, &format!("pages/{}", page_id), None)
            .await
    }
}
