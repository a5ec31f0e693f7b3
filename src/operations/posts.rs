use crate::cli::{Cli, Commands};
use crate::client::{ListingOptions, RedditClient, RedditClientError, SearchOptions};
use crate::models::{PostSummary, RedditPayload};
use log::{error, info};

/// Which Reddit endpoint a posts operation reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostsRequest {
    Search {
        subreddit: String,
        query: String,
        options: SearchOptions,
    },
    Latest {
        subreddit: String,
        options: ListingOptions,
    },
    Post {
        url: String,
    },
}

/// Configuration options for fetching posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsOptions {
    pub request: PostsRequest,
    /// Display posts in a brief, one-line format
    pub brief: bool,
    /// Print the raw payload as pretty JSON instead of summaries
    pub json: bool,
}

impl PostsOptions {
    pub fn new(request: PostsRequest) -> Self {
        Self {
            request,
            brief: false,
            json: false,
        }
    }
}

/// Result of a posts fetch operation
#[derive(Debug)]
pub struct PostsResult {
    /// The number of posts found
    pub post_count: usize,
    /// Formatted output (for CLI display)
    pub formatted_output: String,
    /// The raw API response data
    pub raw_response: RedditPayload,
}

/// Operation for fetching posts from Reddit
pub struct PostsOperation {
    options: PostsOptions,
    client: RedditClient,
}

impl PostsOperation {
    pub fn new(options: PostsOptions, client: RedditClient) -> Self {
        Self { options, client }
    }

    /// Execute the posts operation
    pub async fn execute(&self) -> Result<PostsResult, RedditClientError> {
        let payload = match &self.options.request {
            PostsRequest::Search {
                subreddit,
                query,
                options,
            } => {
                info!("Searching r/{} for: {}", subreddit, query);
                self.client.search_subreddit(subreddit, query, options).await?
            }
            PostsRequest::Latest { subreddit, options } => {
                info!("Getting latest posts from r/{}", subreddit);
                self.client.get_latest_posts(subreddit, options).await?
            }
            PostsRequest::Post { url } => {
                info!("Retrieving: {}", url);
                self.client.retrieve_post(url).await?
            }
        };

        let posts = payload.posts();
        let formatted_output = if self.options.json {
            let mut output = serde_json::to_string_pretty(&payload)?;
            output.push('\n');
            output
        } else {
            self.format_posts(&posts, &payload)
        };

        Ok(PostsResult {
            post_count: posts.len(),
            formatted_output,
            raw_response: payload,
        })
    }

    fn format_posts(&self, posts: &[PostSummary], payload: &RedditPayload) -> String {
        let mut output = String::new();

        if let Some(text) = payload.as_text() {
            output.push_str(text);
            output.push('\n');
            return output;
        }

        if posts.is_empty() {
            output.push_str("No posts found.\n");
            return output;
        }

        output.push_str(&format!("Found {} posts\n", posts.len()));
        if self.options.brief {
            self.format_brief_output(posts, &mut output);
        } else {
            self.format_detailed_output(posts, &mut output);
        }
        output
    }

    // Internal helper method for brief output format
    fn format_brief_output(&self, posts: &[PostSummary], output: &mut String) {
        for (i, post) in posts.iter().enumerate() {
            output.push_str(&format!(
                "{:2}. {} | ID: {}\n",
                i + 1,
                post.format_short_summary(),
                post.name
            ));
        }
    }

    // Internal helper method for detailed output format
    fn format_detailed_output(&self, posts: &[PostSummary], output: &mut String) {
        for post in posts {
            output.push('\n');
            output.push_str(&post.format_summary(self.client.base_url()));
            output.push('\n');
        }
    }
}

impl From<&Cli> for PostsOptions {
    fn from(cli: &Cli) -> Self {
        let request = match &cli.command {
            Commands::Search {
                subreddit,
                query,
                limit,
                sort,
                time,
                after,
                before,
            } => PostsRequest::Search {
                subreddit: subreddit.clone(),
                query: query.clone(),
                options: SearchOptions {
                    limit: *limit,
                    sort: *sort,
                    time_range: *time,
                    after: after.clone(),
                    before: before.clone(),
                },
            },
            Commands::Latest {
                subreddit,
                limit,
                after,
                before,
            } => PostsRequest::Latest {
                subreddit: subreddit.clone(),
                options: ListingOptions {
                    limit: *limit,
                    after: after.clone(),
                    before: before.clone(),
                },
            },
            Commands::Post { url } => PostsRequest::Post { url: url.clone() },
        };

        Self {
            request,
            brief: cli.brief,
            json: cli.json,
        }
    }
}

/// CLI handler: runs the parsed command and prints its output.
pub async fn handle_command(cli: &Cli, client: RedditClient) -> Result<(), RedditClientError> {
    let operation = PostsOperation::new(PostsOptions::from(cli), client);
    match operation.execute().await {
        Ok(result) => {
            print!("{}", result.formatted_output);
            Ok(())
        }
        Err(err) => {
            if let Some(details) = err.details() {
                error!("{}: {}", err, details);
            }
            Err(err)
        }
    }
}
