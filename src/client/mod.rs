use crate::http::{HttpRequest, ReqwestTransport, RetryPolicy, Transport};
use crate::models::RedditPayload;
use log::{debug, warn};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

mod error;
mod options;

pub use error::{ErrorDetails, RedditClientError, TransportError, MAX_DETAIL_CHARS};
pub use options::{
    ListingOptions, SearchOptions, SortOrder, TimeRange, DEFAULT_LIMIT, MAX_LIMIT,
};

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Sent on every request. Reddit rejects requests without an identifying agent.
pub const DEFAULT_USER_AGENT: &str = concat!("redpeek/", env!("CARGO_PKG_VERSION"));

const SEARCH_CONTEXT: &str = "Reddit search";
const POST_CONTEXT: &str = "Reddit post retrieval";
const LATEST_CONTEXT: &str = "Reddit latest posts";

/// Construction-time settings. Nothing here can change per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Client for Reddit's public JSON endpoints.
///
/// Holds no per-request state; clones share the transport and can be used
/// from many tasks at once.
#[derive(Clone)]
pub struct RedditClient {
    base_url: Url,
    user_agent: String,
    transport: Arc<dyn Transport>,
}

impl RedditClient {
    /// Client for `https://www.reddit.com` with the default retry policy.
    pub fn new() -> Result<Self, RedditClientError> {
        Self::from_config(&ClientConfig::default(), RetryPolicy::default())
    }

    /// Create a client from a configuration object, backed by reqwest.
    pub fn from_config(
        config: &ClientConfig,
        policy: RetryPolicy,
    ) -> Result<Self, RedditClientError> {
        let transport = ReqwestTransport::new(policy)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client that sends its requests through `transport`.
    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, RedditClientError> {
        let base = config.base_url.trim();
        let base = if base.is_empty() { DEFAULT_BASE_URL } else { base };
        let base_url = Url::parse(base).map_err(|e| {
            RedditClientError::invalid(format!("invalid base URL '{}': {}", base, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RedditClientError::invalid(format!(
                "invalid base URL '{}': cannot hold a path",
                base
            )));
        }

        debug!(
            "Creating RedditClient for {} with user_agent: {}",
            base_url, config.user_agent
        );

        Ok(Self {
            base_url,
            user_agent: config.user_agent.clone(),
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Search posts within one subreddit.
    ///
    /// Returns Reddit's listing envelope (`{kind, data: {children}}`) unchanged.
    pub async fn search_subreddit(
        &self,
        subreddit: &str,
        query: &str,
        opts: &SearchOptions,
    ) -> Result<RedditPayload, RedditClientError> {
        let url = self.search_url(subreddit, query, opts)?;
        self.fetch(url, SEARCH_CONTEXT).await
    }

    /// Fetch a post and its comment tree from a permalink.
    ///
    /// Returns the `[post listing, comment listing]` pair.
    pub async fn retrieve_post(&self, post_url: &str) -> Result<RedditPayload, RedditClientError> {
        let url = self.post_url(post_url)?;
        self.fetch(url, POST_CONTEXT).await
    }

    /// Fetch the newest posts of a subreddit.
    pub async fn get_latest_posts(
        &self,
        subreddit: &str,
        opts: &ListingOptions,
    ) -> Result<RedditPayload, RedditClientError> {
        let url = self.latest_url(subreddit, opts)?;
        self.fetch(url, LATEST_CONTEXT).await
    }

    /// `{base}/r/{subreddit}/search.json?q=..&restrict_sr=true&limit=..&sort=..[&t][&after][&before]`
    pub fn search_url(
        &self,
        subreddit: &str,
        query: &str,
        opts: &SearchOptions,
    ) -> Result<Url, RedditClientError> {
        let subreddit = normalize_subreddit(subreddit)?;
        if query.trim().is_empty() {
            return Err(RedditClientError::invalid("query is required"));
        }

        let mut url = self.subreddit_url(subreddit, "search.json")?;
        {
            let mut params = url.query_pairs_mut();
            params
                .append_pair("q", query)
                .append_pair("restrict_sr", "true")
                .append_pair("limit", &options::effective_limit(opts.limit).to_string())
                .append_pair("sort", opts.sort.unwrap_or_default().as_str());
            if let Some(t) = opts.time_range {
                params.append_pair("t", t.as_str());
            }
            if let Some(after) = non_empty(&opts.after) {
                params.append_pair("after", after);
            }
            if let Some(before) = non_empty(&opts.before) {
                params.append_pair("before", before);
            }
        }
        Ok(url)
    }

    /// `{base}/r/{subreddit}/new.json?limit=..[&after][&before]`
    pub fn latest_url(
        &self,
        subreddit: &str,
        opts: &ListingOptions,
    ) -> Result<Url, RedditClientError> {
        let subreddit = normalize_subreddit(subreddit)?;

        let mut url = self.subreddit_url(subreddit, "new.json")?;
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("limit", &options::effective_limit(opts.limit).to_string());
            if let Some(after) = non_empty(&opts.after) {
                params.append_pair("after", after);
            }
            if let Some(before) = non_empty(&opts.before) {
                params.append_pair("before", before);
            }
        }
        Ok(url)
    }

    /// Normalizes a permalink into its `.json` form.
    ///
    /// Absolute URLs are used as given, even when they point somewhere other
    /// than the base URL. Site-relative permalinks (`/r/...`) are resolved
    /// against the base URL.
    pub fn post_url(&self, post_url: &str) -> Result<Url, RedditClientError> {
        let post_url = post_url.trim();
        if post_url.is_empty() {
            return Err(RedditClientError::invalid("postUrl is required"));
        }

        let json_url = if post_url.ends_with(".json") {
            post_url.to_string()
        } else {
            format!("{}.json", post_url)
        };

        let parsed = if json_url.starts_with('/') {
            self.base_url.join(&json_url)
        } else {
            Url::parse(&json_url)
        };
        parsed.map_err(|e| {
            RedditClientError::invalid(format!("postUrl '{}' is not a valid URL: {}", post_url, e))
        })
    }

    fn subreddit_url(&self, subreddit: &str, endpoint: &str) -> Result<Url, RedditClientError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| RedditClientError::invalid("base URL cannot hold a path"))?
            .pop_if_empty()
            .extend(&["r", subreddit, endpoint]);
        Ok(url)
    }

    async fn fetch(&self, url: Url, context: &str) -> Result<RedditPayload, RedditClientError> {
        debug!("{}: GET {}", context, url);

        let request = HttpRequest::get(url.as_str()).header("User-Agent", self.user_agent.as_str());
        let response = self.transport.fetch(request).await?;
        let success = response.is_success();

        // A failed body read must not hide the status, so fall back to empty.
        let text = match response.body {
            Ok(text) => text,
            Err(e) => {
                warn!("{}: {}, treating body as empty", context, e);
                String::new()
            }
        };
        debug!("Response body length: {} bytes", text.len());

        parse_json_or_raw(response.status, success, text, context)
    }
}

/// Pagination cursors are sent only when they carry a value.
fn non_empty(cursor: &Option<String>) -> Option<&str> {
    cursor.as_deref().filter(|c| !c.is_empty())
}

/// Strips an optional `r/` or `/r/` prefix and trailing slashes.
fn normalize_subreddit(subreddit: &str) -> Result<&str, RedditClientError> {
    let name = subreddit.trim();
    let name = name
        .strip_prefix("/r/")
        .or_else(|| name.strip_prefix("r/"))
        .unwrap_or(name)
        .trim_matches('/');
    if name.is_empty() {
        return Err(RedditClientError::invalid("subreddit is required"));
    }
    Ok(name)
}

/// Maps a finished response onto a payload or a request error.
///
/// The status decides whether this is an error. Whether the body parsed only
/// decides if the value or details are structured or raw text.
fn parse_json_or_raw(
    status: u16,
    success: bool,
    text: String,
    context: &str,
) -> Result<RedditPayload, RedditClientError> {
    let parsed = if text.is_empty() {
        None
    } else {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("{}: body is not JSON ({})", context, e);
                None
            }
        }
    };

    match (success, parsed) {
        (true, Some(value)) => Ok(RedditPayload::Json(value)),
        (true, None) if text.is_empty() => Ok(RedditPayload::Empty),
        (true, None) => Ok(RedditPayload::Text(text)),
        (false, parsed) => {
            // A bare `null` body says nothing structured; keep the raw text.
            let details = match parsed {
                Some(value) if !value.is_null() => ErrorDetails::Json(value),
                _ => ErrorDetails::truncated(&text),
            };
            Err(RedditClientError::Request {
                message: format!("{} failed ({})", context, status),
                status,
                details,
            })
        }
    }
}
