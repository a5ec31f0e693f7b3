use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of items requested when the caller does not pick a limit.
pub const DEFAULT_LIMIT: u32 = 25;

/// Largest page size Reddit serves for listings.
pub const MAX_LIMIT: u32 = 100;

/// Sort order for subreddit search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Relevance,
    Hot,
    Top,
    New,
    Comments,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Relevance,
        SortOrder::Hot,
        SortOrder::Top,
        SortOrder::New,
        SortOrder::Comments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::Hot => "hot",
            SortOrder::Top => "top",
            SortOrder::New => "new",
            SortOrder::Comments => "comments",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "invalid sort '{}', expected one of: relevance, hot, top, new, comments",
                    s
                )
            })
    }
}

/// Time window for `top`/`hot` search results, sent as `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeRange {
    pub const ALL: [TimeRange; 6] = [
        TimeRange::Hour,
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Year,
        TimeRange::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Hour => "hour",
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::All => "all",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "invalid time range '{}', expected one of: hour, day, week, month, year, all",
                    s
                )
            })
    }
}

/// Options for [`RedditClient::search_subreddit`](super::RedditClient::search_subreddit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Number of results (1-100). `None` or `0` means [`DEFAULT_LIMIT`].
    pub limit: Option<u32>,
    pub sort: Option<SortOrder>,
    pub time_range: Option<TimeRange>,
    /// Fullname to page forward from; passed through untouched.
    pub after: Option<String>,
    /// Fullname to page backward from; passed through untouched.
    pub before: Option<String>,
}

/// Options for [`RedditClient::get_latest_posts`](super::RedditClient::get_latest_posts).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub limit: Option<u32>,
    pub after: Option<String>,
    pub before: Option<String>,
}

pub(crate) fn effective_limit(limit: Option<u32>) -> u32 {
    limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT)
}
