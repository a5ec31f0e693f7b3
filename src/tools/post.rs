use async_trait::async_trait;
use log::info;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use super::{parse_args, require, RedditTool, ToolError};
use crate::client::{RedditClient, RedditClientError};

pub const NAME: &str = "reddit/retrievePost";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostArgs {
    post_url: Option<String>,
}

/// A post's content and comments, by permalink.
pub struct RetrievePostTool;

#[async_trait]
impl RedditTool for RetrievePostTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Retrieve a Reddit post's content and comments by URL."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "postUrl": {
                    "type": "string",
                    "format": "uri",
                    "description": "Reddit post URL (e.g., https://www.reddit.com/r/subreddit/comments/id/title/)",
                },
            },
            "required": ["postUrl"],
        })
    }

    async fn execute(&self, client: &RedditClient, args: Value) -> Result<Value, ToolError> {
        let args: PostArgs = parse_args(NAME, args)?;
        let post_url = require(NAME, "postUrl", &args.post_url)?;
        Url::parse(post_url).map_err(|e| {
            ToolError::new(
                NAME,
                RedditClientError::InvalidArgument(format!("postUrl must be an absolute URL: {}", e)),
            )
        })?;

        info!("[{}] Retrieving: {}", NAME, post_url);

        let post = client
            .retrieve_post(post_url)
            .await
            .map_err(|e| ToolError::new(NAME, e))?;

        Ok(json!({ "post": post }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpResponse, MockTransport};
    use crate::tools::test_support::*;

    #[tokio::test]
    async fn test_retrieve_wraps_post() {
        let mut mock = MockTransport::new();
        mock.expect_fetch()
            .withf(|req| req.url == "https://www.reddit.com/r/rust/comments/abc/title/.json")
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::new(
                    200,
                    r#"[{"data":{"children":[{"data":{"title":"t"}}]}},{"data":{"children":[]}}]"#,
                ))
            });

        let output = RetrievePostTool
            .execute(
                &client_with(mock),
                json!({"postUrl": "https://www.reddit.com/r/rust/comments/abc/title/"}),
            )
            .await
            .unwrap();

        assert_eq!(output["post"][0]["data"]["children"][0]["data"]["title"], "t");
    }

    #[tokio::test]
    async fn test_retrieve_requires_absolute_url() {
        let err = RetrievePostTool
            .execute(&offline_client(), json!({"postUrl": "/r/rust/comments/abc/"}))
            .await
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("[reddit/retrievePost] postUrl must be an absolute URL"));
    }

    #[tokio::test]
    async fn test_retrieve_prefixes_client_errors() {
        let err = RetrievePostTool
            .execute(
                &client_with(responding(500, "oops")),
                json!({"postUrl": "https://www.reddit.com/r/rust/comments/abc/"}),
            )
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "[reddit/retrievePost] Reddit post retrieval failed (500)"
        );
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_retrieve_missing_field() {
        let err = RetrievePostTool
            .execute(&offline_client(), json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "[reddit/retrievePost] postUrl is required");
    }
}
