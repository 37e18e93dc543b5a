//! # notionkit_api
//!
//! Thin client for the Notion REST API.
//!
//! Every operation is a single request: there is no retry, caching or
//! pagination handling. Failures reported by the API are returned as
//! [`ApiError::Remote`] with the status, code and message from the response.
//!
//! # Features
//!
//! - **HTTP Client**: [`NotionClient`], backed by reqwest
//! - **Mock Client**: [`MockNotionClient`] for testing without network access
//!
//! # Example
//!
//! ```rust,no_run
//! use notionkit_api::{NotionApi, NotionClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NotionClient::from_env()?;
//!     let page = client.retrieve_page("0123456789abcdef0123456789abcdef").await?;
//!     println!("{}", serde_json::to_string_pretty(&page)?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod mock;

pub use api::{DatabaseQuery, NotionApi};
pub use client::{NotionClient, BASE_URL_ENV, DEFAULT_BASE_URL, NOTION_VERSION, TOKEN_ENV};
pub use error::{ApiError, ApiResult};
pub use mock::{CapturedCall, MockNotionClient};
