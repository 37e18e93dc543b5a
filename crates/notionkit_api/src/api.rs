//! API trait and request types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiResult;

/// Body of a database query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorts: Option<Value>,
}

impl DatabaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sorts(mut self, sorts: Value) -> Self {
        self.sorts = Some(sorts);
        self
    }
}

/// Operations notionkit performs against the remote workspace.
///
/// Identifiers are expected to be resolved already; payloads are passed
/// through without validation.
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// Create a page. `body` carries `parent`, `properties` and optionally
    /// `children` and `icon`.
    async fn create_page(&self, body: &Value) -> ApiResult<Value>;

    /// Create a database under a parent page.
    async fn create_database(&self, body: &Value) -> ApiResult<Value>;

    /// Update properties of an existing page.
    async fn update_page(&self, page_id: &str, properties: &Value) -> ApiResult<Value>;

    /// Query a database.
    async fn query_database(&self, database_id: &str, query: &DatabaseQuery)
        -> ApiResult<Value>;

    /// Append child blocks to a page or block.
    async fn append_blocks(&self, block_id: &str, children: &Value) -> ApiResult<Value>;

    /// Retrieve a page and its properties.
    async fn retrieve_page(&self, page_id: &str) -> ApiResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_omits_empty_fields() {
        let query = DatabaseQuery::new();
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({}));
    }

    #[test]
    fn test_query_with_filter_and_sorts() {
        let query = DatabaseQuery::new()
            .filter(json!({"property": "Status", "select": {"equals": "Done"}}))
            .sorts(json!([{"property": "Due", "direction": "ascending"}]));

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["filter"]["property"], "Status");
        assert_eq!(value["sorts"][0]["direction"], "ascending");
    }
}
