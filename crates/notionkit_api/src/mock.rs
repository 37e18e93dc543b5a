//! Mock Notion client for testing.
//!
//! Captures every call and answers with a predefined response, so command
//! flows can be tested without network access.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{json, Value};

use crate::api::{DatabaseQuery, NotionApi};
use crate::error::{ApiError, ApiResult};

/// Captured call information for verification.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedCall {
    pub method: String,
    /// Resolved identifier the call addressed, if the operation takes one.
    pub target: Option<String>,
    pub payload: Option<Value>,
}

/// Mock Notion client for testing.
#[derive(Clone)]
pub struct MockNotionClient {
    /// Response returned by every successful call.
    response: Arc<RwLock<Value>>,
    /// Captured calls for verification.
    captured_calls: Arc<RwLock<Vec<CapturedCall>>>,
    /// Simulated remote failure (status, code, message).
    simulate_failure: Arc<RwLock<Option<(u16, String, String)>>>,
}

impl Default for MockNotionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNotionClient {
    pub fn new() -> Self {
        Self {
            response: Arc::new(RwLock::new(json!({
                "object": "page",
                "id": "mock-page-id",
                "url": "https://www.notion.so/mock-page-id"
            }))),
            captured_calls: Arc::new(RwLock::new(Vec::new())),
            simulate_failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the response returned by successful calls.
    pub fn with_response(self, response: Value) -> Self {
        *self.response.write() = response;
        self
    }

    /// Make every call fail as if the API had rejected it.
    pub fn simulate_failure(
        self,
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        *self.simulate_failure.write() = Some((status, code.into(), message.into()));
        self
    }

    /// Get all captured calls.
    pub fn get_calls(&self) -> Vec<CapturedCall> {
        self.captured_calls.read().clone()
    }

    pub fn call_count(&self) -> usize {
        self.captured_calls.read().len()
    }

    /// The most recent call, if any.
    pub fn last_call(&self) -> Option<CapturedCall> {
        self.captured_calls.read().last().cloned()
    }

    fn record(
        &self,
        method: &str,
        target: Option<&str>,
        payload: Option<Value>,
    ) -> ApiResult<Value> {
        self.captured_calls.write().push(CapturedCall {
            method: method.to_string(),
            target: target.map(String::from),
            payload,
        });

        if let Some((status, code, message)) = self.simulate_failure.read().clone() {
            return Err(ApiError::Remote {
                status,
                code,
                message,
            });
        }
        Ok(self.response.read().clone())
    }
}

#[async_trait]
impl NotionApi for MockNotionClient {
    async fn create_page(&self, body: &Value) -> ApiResult<Value> {
        self.record("create_page", None, Some(body.clone()))
    }

    async fn create_database(&self, body: &Value) -> ApiResult<Value> {
        self.record("create_database", None, Some(body.clone()))
    }

    async fn update_page(&self, page_id: &str, properties: &Value) -> ApiResult<Value> {
        self.record("update_page", Some(page_id), Some(properties.clone()))
    }

    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> ApiResult<Value> {
        let payload = serde_json::to_value(query)?;
        self.record("query_database", Some(database_id), Some(payload))
    }

    async fn append_blocks(&self, block_id: &str, children: &Value) -> ApiResult<Value> {
        self.record("append_blocks", Some(block_id), Some(children.clone()))
    }

    async fn retrieve_page(&self, page_id: &str) -> ApiResult<Value> {
        self.record("retrieve_page", Some(page_id), None)
    }
}
