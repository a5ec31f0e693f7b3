use async_trait::async_trait;
use log::info;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{check_limit, cursor_schema, limit_schema, parse_args, require, RedditTool, ToolError};
use crate::client::{RedditClient, SearchOptions, SortOrder, TimeRange};

pub const NAME: &str = "reddit/searchSubreddit";

#[derive(Debug, Deserialize)]
struct SearchArgs {
    subreddit: Option<String>,
    query: Option<String>,
    limit: Option<u32>,
    sort: Option<SortOrder>,
    t: Option<TimeRange>,
    after: Option<String>,
    before: Option<String>,
}

/// Search posts in a specific subreddit.
pub struct SearchSubredditTool;

#[async_trait]
impl RedditTool for SearchSubredditTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Search posts in a specific subreddit. Returns structured JSON with search results."
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
                "query": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Search query",
                },
                "limit": limit_schema("Number of results (1-100, default: 25)"),
                "sort": {
                    "type": "string",
                    "enum": SortOrder::ALL.iter().map(SortOrder::as_str).collect::<Vec<_>>(),
                    "description": "Sort order (default: relevance)",
                },
                "t": {
                    "type": "string",
                    "enum": TimeRange::ALL.iter().map(TimeRange::as_str).collect::<Vec<_>>(),
                    "description": "Time period for top/hot sorting",
                },
                "after": cursor_schema(),
                "before": cursor_schema(),
            },
            "required": ["subreddit", "query"],
        })
    }

    async fn execute(&self, client: &RedditClient, args: Value) -> Result<Value, ToolError> {
        let args: SearchArgs = parse_args(NAME, args)?;
        let subreddit = require(NAME, "subreddit", &args.subreddit)?;
        let query = require(NAME, "query", &args.query)?;
        check_limit(NAME, args.limit)?;

        info!("[{}] Searching r/{} for: {}", NAME, subreddit, query);

        let opts = SearchOptions {
            limit: args.limit,
            sort: args.sort,
            time_range: args.t,
            after: args.after.clone(),
            before: args.before.clone(),
        };
        let results = client
            .search_subreddit(subreddit, query, &opts)
            .await
            .map_err(|e| ToolError::new(NAME, e))?;

        Ok(json!({ "results": results }))
    }
}
