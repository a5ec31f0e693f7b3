//! String-in, JSON-string-out functions for embedding in scripting hosts.
//!
//! Search and listing results are projected down to the `children` array;
//! post retrieval returns the full `[post, comments]` pair.

use serde_json::Value;

use crate::client::{ListingOptions, RedditClient, RedditClientError, SearchOptions};

pub async fn search_subreddit(
    client: &RedditClient,
    subreddit: &str,
    query: &str,
    opts: &SearchOptions,
) -> Result<String, RedditClientError> {
    let results = client.search_subreddit(subreddit, query, opts).await?;
    Ok(serde_json::to_string(&Value::Array(results.children()))?)
}

pub async fn get_reddit_post(
    client: &RedditClient,
    post_url: &str,
) -> Result<String, RedditClientError> {
    let post = client.retrieve_post(post_url).await?;
    Ok(serde_json::to_string(&post)?)
}

pub async fn get_latest_posts(
    client: &RedditClient,
    subreddit: &str,
    opts: &ListingOptions,
) -> Result<String, RedditClientError> {
    let posts = client.get_latest_posts(subreddit, opts).await?;
    Ok(serde_json::to_string(&Value::Array(posts.children()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::*;

    const LISTING: &str =
        r#"{"kind":"Listing","data":{"after":"t3_b","children":[{"data":{"title":"a"}},{"data":{"title":"b"}}]}}"#;

    #[tokio::test]
    async fn test_search_projects_children() {
        let json = search_subreddit(
            &client_with(responding(200, LISTING)),
            "rust",
            "tokio",
            &SearchOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(json, r#"[{"data":{"title":"a"}},{"data":{"title":"b"}}]"#);
    }

    #[tokio::test]
    async fn test_latest_projects_children() {
        let json = get_latest_posts(
            &client_with(responding(200, LISTING)),
            "rust",
            &ListingOptions::default(),
        )
        .await
        .unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_listing_without_children_is_empty_array() {
        let json = get_latest_posts(
            &client_with(responding(200, "plain text")),
            "rust",
            &ListingOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(json, "[]");
    }

    #[tokio::test]
    async fn test_post_is_returned_whole() {
        let json = get_reddit_post(
            &client_with(responding(200, r#"[{"data":{}},{"data":{}}]"#)),
            "https://www.reddit.com/r/rust/comments/abc/t/",
        )
        .await
        .unwrap();
        assert_eq!(json, r#"[{"data":{}},{"data":{}}]"#);
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let err = get_reddit_post(&offline_client(), "").await.unwrap_err();
        assert!(matches!(err, RedditClientError::InvalidArgument(_)));
    }
}
