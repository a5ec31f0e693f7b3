use crate::client::{SortOrder, TimeRange};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "redpeek",
    version,
    about = "Read-only client for Reddit's public JSON endpoints."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Reddit base URL (defaults to https://www.reddit.com; also via REDDIT_BASE_URL)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Print the raw JSON payload instead of post summaries.
    #[arg(long, global = true, conflicts_with = "brief")]
    pub json: bool,

    /// Display posts in a brief, one-line format.
    #[arg(long, short, global = true)]
    pub brief: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Search posts in a subreddit.
    Search {
        /// Subreddit name (with or without the r/ prefix).
        subreddit: String,

        /// Search query.
        query: String,

        /// Number of results (1-100, default 25).
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: Option<u32>,

        /// Sort order: relevance, hot, top, new, comments.
        #[arg(long, short)]
        sort: Option<SortOrder>,

        /// Time window: hour, day, week, month, year, all.
        #[arg(long, short)]
        time: Option<TimeRange>,

        /// Fullname to page forward from.
        #[arg(long)]
        after: Option<String>,

        /// Fullname to page backward from.
        #[arg(long)]
        before: Option<String>,
    },

    /// Retrieve a post and its comments by URL.
    Post {
        /// Post permalink, absolute or starting with /r/.
        url: String,
    },

    /// Get the newest posts of a subreddit.
    Latest {
        /// Subreddit name (with or without the r/ prefix).
        subreddit: String,

        /// Number of posts (1-100, default 25).
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: Option<u32>,

        /// Fullname to page forward from.
        #[arg(long)]
        after: Option<String>,

        /// Fullname to page backward from.
        #[arg(long)]
        before: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_latest_parsing() {
        let cli = Cli::try_parse_from(["redpeek", "latest", "rust", "-l", "10"]).unwrap();
        match cli.command {
            Commands::Latest {
                subreddit, limit, ..
            } => {
                assert_eq!(subreddit, "rust");
                assert_eq!(limit, Some(10));
            }
            _ => panic!("Expected Latest command"),
        }
        assert_eq!(cli.base_url, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_global_base_url() {
        let cli = Cli::try_parse_from([
            "redpeek",
            "post",
            "https://www.reddit.com/r/rust/comments/abc/t/",
            "--base-url",
            "http://localhost:1234",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:1234"));
    }

    #[test]
    fn test_cli_rejects_limit_out_of_range() {
        assert!(Cli::try_parse_from(["redpeek", "latest", "rust", "--limit", "0"]).is_err());
        assert!(Cli::try_parse_from(["redpeek", "latest", "rust", "--limit", "101"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["redpeek", "search", "rust", "q", "--sort", "best"]).is_err());
    }

    #[test]
    fn test_cli_json_conflicts_with_brief() {
        assert!(Cli::try_parse_from(["redpeek", "--json", "--brief", "latest", "rust"]).is_err());
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["redpeek", "rust"]).is_err());
    }
}
