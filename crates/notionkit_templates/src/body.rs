//! Request bodies for page and database creation.

use serde_json::{json, Value};

use crate::error::{TemplateError, TemplateResult};

/// Icon used for project pages when none is given.
pub const DEFAULT_ICON: &str = "🚀";

/// Field that templates exported from the API carry but creation requests must not.
const DISCRIMINATOR_FIELD: &str = "object";

/// Builds the final creation payload from a (substituted) template document.
#[derive(Debug, Clone)]
pub struct RequestBody {
    document: Value,
    parent: Option<Value>,
    icon: Option<Value>,
}

impl RequestBody {
    pub fn new(document: Value) -> Self {
        Self {
            document,
            parent: None,
            icon: None,
        }
    }

    /// Place the new page or database under a page.
    pub fn parent_page(mut self, page_id: impl Into<String>) -> Self {
        self.parent = Some(json!({ "page_id": page_id.into() }));
        self
    }

    /// Set an emoji icon.
    pub fn icon(mut self, emoji: impl Into<String>) -> Self {
        self.icon = Some(json!({ "type": "emoji", "emoji": emoji.into() }));
        self
    }

    /// Merge parent and icon into the document and drop the `object` field.
    pub fn build(self) -> TemplateResult<Value> {
        let mut map = match self.document {
            Value::Object(map) => map,
            other => {
                return Err(TemplateError::InvalidDocument(format!(
                    "expected a JSON object at the top level, found {}",
                    kind_of(&other)
                )))
            }
        };

        if let Some(parent) = self.parent {
            map.insert("parent".to_string(), parent);
        }
        if let Some(icon) = self.icon {
            map.insert("icon".to_string(), icon);
        }
        map.remove(DISCRIMINATOR_FIELD);

        Ok(Value::Object(map))
    }
}

/// Page body used when no template is given.
pub fn default_page_body(title: Option<&str>) -> Value {
    json!({
        "properties": {
            "title": {
                "title": [{"type": "text", "text": {"content": title.unwrap_or("Untitled")}}]
            }
        },
        "children": []
    })
}

/// Database body used when no template is given.
pub fn default_database_body(title: Option<&str>) -> Value {
    json!({
        "title": [{"type": "text", "text": {"content": title.unwrap_or("Untitled Database")}}],
        "properties": {"Name": {"title": {}}}
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
