use chrono::{TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Lenient view of a post inside a listing, used for display only.
///
/// Reddit returns far more fields than this; everything is optional so that
/// removed posts, ads and comment nodes don't fail to parse.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PostSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: i64,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub over_18: bool,
    #[serde(default)]
    pub stickied: bool,
}

impl PostSummary {
    /// Parses the `data` object of a listing child. Children without a title
    /// (comments, "more" stubs) are skipped.
    pub fn from_child(child: &Value) -> Option<Self> {
        let data = child.get("data")?;
        let post: PostSummary = serde_json::from_value(data.clone()).ok()?;
        if post.title.is_empty() {
            None
        } else {
            Some(post)
        }
    }

    /// Get a short summary for the post (title, author, score)
    pub fn format_short_summary(&self) -> String {
        format!(
            "[r/{} | {} pts] {} - by u/{}",
            self.subreddit, self.score, self.title, self.author
        )
    }

    /// Format timestamp as a human-readable string
    pub fn format_timestamp(&self) -> String {
        let timestamp = Utc
            .timestamp_opt(self.created_utc as i64, 0)
            .single()
            .unwrap_or_else(Utc::now);

        timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    pub fn permalink_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.permalink)
    }

    /// Format a post for display with important metadata
    pub fn format_summary(&self, base_url: &str) -> String {
        let mut content = format!(
            "{}\n  {} | {} comments | {}",
            self.format_short_summary(),
            self.format_timestamp(),
            self.num_comments,
            self.permalink_url(base_url),
        );

        let mut flags = Vec::new();
        if self.is_self {
            flags.push("Self Post");
        }
        if self.over_18 {
            flags.push("NSFW");
        }
        if self.stickied {
            flags.push("Stickied");
        }
        if !flags.is_empty() {
            content.push_str(&format!("\n  Flags: [{}]", flags.join(", ")));
        }

        // Truncate long self text, safely handling UTF-8
        let text = self.selftext.trim();
        if self.is_self && !text.is_empty() {
            let excerpt: String = if text.chars().count() > 200 {
                let mut chars = text.chars().take(197).collect::<String>();
                chars.push_str("...");
                chars
            } else {
                text.to_string()
            };
            content.push_str(&format!("\n  {}", excerpt.replace('\n', " ")));
        }

        content
    }
}
