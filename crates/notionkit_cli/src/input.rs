//! Parsing of JSON given on the command line.

use serde_json::Value;
use thiserror::Error;

/// A JSON argument (filter, sorts, properties, blocks) that failed to parse.
#[derive(Error, Debug)]
#[error("Invalid JSON for {flag}: {source}")]
pub struct MalformedInput {
    pub flag: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Parse the raw value of a JSON-valued flag.
pub fn parse_json_arg(flag: &'static str, raw: &str) -> Result<Value, MalformedInput> {
    serde_json::from_str(raw).map_err(|source| MalformedInput { flag, source })
}
