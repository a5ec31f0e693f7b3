use serde::Serialize;
use serde_json::Value;

pub mod post;

pub use post::PostSummary;

/// Successful result of a Reddit request.
///
/// Reddit's JSON is passed through as-is. A body that is not JSON is kept as
/// text instead of being treated as an error, and an empty body is its own case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RedditPayload {
    Json(Value),
    Text(String),
    Empty,
}

impl RedditPayload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RedditPayload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RedditPayload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Flattens the payload into a JSON value (`Text` as a string, `Empty` as null).
    pub fn into_value(self) -> Value {
        match self {
            RedditPayload::Json(value) => value,
            RedditPayload::Text(text) => Value::String(text),
            RedditPayload::Empty => Value::Null,
        }
    }

    /// The `data.children` array of a listing envelope, or an empty list.
    pub fn children(&self) -> Vec<Value> {
        self.as_json().map(listing_children).unwrap_or_default()
    }

    /// Posts of a listing envelope, or of the first listing of a
    /// `[post, comments]` pair.
    pub fn posts(&self) -> Vec<PostSummary> {
        let listing = match self.as_json() {
            Some(Value::Array(listings)) => listings.first(),
            other => other,
        };
        listing
            .map(listing_children)
            .unwrap_or_default()
            .iter()
            .filter_map(PostSummary::from_child)
            .collect()
    }
}

/// Extracts `data.children` from a listing envelope.
pub fn listing_children(listing: &Value) -> Vec<Value> {
    listing
        .pointer("/data/children")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_children_of_listing() {
        let payload = RedditPayload::Json(json!({
            "kind": "Listing",
            "data": {"children": [{"data": {"title": "x"}}, {"data": {"title": "y"}}]}
        }));
        let children = payload.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1]["data"]["title"], "y");
    }

    #[test]
    fn test_children_missing_is_empty() {
        assert!(RedditPayload::Json(json!({"data": {}})).children().is_empty());
        assert!(RedditPayload::Text("plain text".to_string()).children().is_empty());
        assert!(RedditPayload::Empty.children().is_empty());
    }

    #[test]
    fn test_into_value() {
        assert_eq!(RedditPayload::Json(json!([1, 2])).into_value(), json!([1, 2]));
        assert_eq!(RedditPayload::Text("hi".to_string()).into_value(), json!("hi"));
        assert_eq!(RedditPayload::Empty.into_value(), Value::Null);
    }

    #[test]
    fn test_serializes_untagged() {
        let text = serde_json::to_string(&RedditPayload::Text("plain".to_string())).unwrap();
        assert_eq!(text, "\"plain\"");
        assert_eq!(serde_json::to_string(&RedditPayload::Empty).unwrap(), "null");
    }

    #[test]
    fn test_posts_from_post_and_comments_pair() {
        let payload = RedditPayload::Json(json!([
            {"kind": "Listing", "data": {"children": [
                {"kind": "t3", "data": {"id": "abc", "title": "Hello", "author": "me", "subreddit": "rust"}}
            ]}},
            {"kind": "Listing", "data": {"children": [
                {"kind": "t1", "data": {"id": "c1", "body": "a comment"}}
            ]}}
        ]));
        let posts = payload.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
    }
}
