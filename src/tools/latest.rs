use async_trait::async_trait;
use log::info;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{check_limit, cursor_schema, limit_schema, parse_args, require, RedditTool, ToolError};
use crate::client::{ListingOptions, RedditClient};

pub const NAME: &str = "reddit/getLatestPosts";

#[derive(Debug, Deserialize)]
struct LatestArgs {
    subreddit: Option<String>,
    limit: Option<u32>,
    after: Option<String>,
    before: Option<String>,
}

/// Newest posts of a subreddit.
pub struct GetLatestPostsTool;

#[async_trait]
impl RedditTool for GetLatestPostsTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Get the latest posts from a subreddit. Returns newest posts in chronological order."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "subreddit": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Subreddit name (without r/ prefix)",
                },
                "limit": limit_schema("Number of posts (1-100, default: 25)"),
                "after": cursor_schema(),
                "before": cursor_schema(),
            },
            "required": ["subreddit"],
        })
    }

    async fn execute(&self, client: &RedditClient, args: Value) -> Result<Value, ToolError> {
        let args: LatestArgs = parse_args(NAME, args)?;
        let subreddit = require(NAME, "subreddit", &args.subreddit)?;
        check_limit(NAME, args.limit)?;

        info!("[{}] Getting latest posts from r/{}", NAME, subreddit);

        let opts = ListingOptions {
            limit: args.limit,
            after: args.after.clone(),
            before: args.before.clone(),
        };
        let posts = client
            .get_latest_posts(subreddit, &opts)
            .await
            .map_err(|e| ToolError::new(NAME, e))?;

        Ok(json!({ "posts": posts }))
    }
}
