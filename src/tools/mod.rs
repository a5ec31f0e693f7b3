//! Host-facing tool wrappers around [`RedditClient`].
//!
//! Each tool has a stable name (`reddit/searchSubreddit`, ...), a JSON Schema
//! describing its input, and an `execute` that validates the input, calls
//! the client and wraps the result for the host. [`ToolRegistry`] collects
//! them and dispatches calls by name.

mod latest;
mod post;
mod search;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::client::{RedditClient, RedditClientError, MAX_LIMIT};

pub use latest::GetLatestPostsTool;
pub use post::RetrievePostTool;
pub use search::SearchSubredditTool;

/// A failed tool call. The message is prefixed with the tool name; the
/// underlying client error (status, details) stays reachable as the source.
#[derive(Debug, thiserror::Error)]
#[error("[{tool}] {source}")]
pub struct ToolError {
    pub tool: String,
    pub source: RedditClientError,
}

impl ToolError {
    pub fn new(tool: impl Into<String>, source: RedditClientError) -> Self {
        Self {
            tool: tool.into(),
            source,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.source.status()
    }
}

/// What the host needs to advertise a tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[async_trait]
pub trait RedditTool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON Schema of the accepted arguments.
    fn input_schema(&self) -> Value;

    async fn execute(&self, client: &RedditClient, args: Value) -> Result<Value, ToolError>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Named set of tools sharing one client.
pub struct ToolRegistry {
    client: RedditClient,
    tools: BTreeMap<&'static str, Box<dyn RedditTool>>,
}

impl ToolRegistry {
    pub fn new(client: RedditClient) -> Self {
        Self {
            client,
            tools: BTreeMap::new(),
        }
    }

    /// Registry with the three Reddit tools installed.
    pub fn with_reddit_tools(client: RedditClient) -> Self {
        let mut registry = Self::new(client);
        registry.register(SearchSubredditTool);
        registry.register(RetrievePostTool);
        registry.register(GetLatestPostsTool);
        registry
    }

    pub fn register(&mut self, tool: impl RedditTool + 'static) {
        self.tools.insert(tool.name(), Box::new(tool));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    pub async fn execute(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let tool = self.tools.get(name).ok_or_else(|| {
            ToolError::new(
                name,
                RedditClientError::InvalidArgument(format!("unknown tool '{}'", name)),
            )
        })?;
        tool.execute(&self.client, args).await
    }
}

/// Deserializes tool arguments, reporting failures against the tool name.
pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T, ToolError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| {
        ToolError::new(
            tool,
            RedditClientError::InvalidArgument(format!("invalid input: {}", e)),
        )
    })
}

/// Returns the trimmed value of a required string field.
pub(crate) fn require<'a>(
    tool: &str,
    field: &str,
    value: &'a Option<String>,
) -> Result<&'a str, ToolError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ToolError::new(
            tool,
            RedditClientError::InvalidArgument(format!("{} is required", field)),
        )),
    }
}

pub(crate) fn check_limit(tool: &str, limit: Option<u32>) -> Result<(), ToolError> {
    match limit {
        Some(l) if l == 0 || l > MAX_LIMIT => Err(ToolError::new(
            tool,
            RedditClientError::InvalidArgument(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, l
            )),
        )),
        _ => Ok(()),
    }
}

pub(crate) fn limit_schema(description: &str) -> Value {
    serde_json::json!({
        "type": "integer",
        "minimum": 1,
        "maximum": MAX_LIMIT,
        "description": description,
    })
}

pub(crate) fn cursor_schema() -> Value {
    serde_json::json!({
        "type": "string",
        "description": "Fullname of a thing for pagination",
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::client::{ClientConfig, RedditClient};
    use crate::http::{HttpResponse, MockTransport};
    use std::sync::Arc;

    pub fn client_with(mock: MockTransport) -> RedditClient {
        RedditClient::with_transport(&ClientConfig::default(), Arc::new(mock)).unwrap()
    }

    pub fn offline_client() -> RedditClient {
        client_with(MockTransport::new())
    }

    pub fn responding(status: u16, body: &'static str) -> MockTransport {
        let mut mock = MockTransport::new();
        mock.expect_fetch()
            .times(1)
            .returning(move |_| Ok(HttpResponse::new(status, body)));
        mock
    }
}
