//! Read-only access to Reddit's public JSON endpoints.
//!
//! [`client::RedditClient`] covers subreddit search, latest posts and single
//! post retrieval. [`tools`] and [`bindings`] wrap the same operations for
//! agent hosts and scripting environments.

pub mod bindings;
pub mod cli;
pub mod client;
pub mod config;
pub mod http;
pub mod models;
pub mod operations;
pub mod tools;

pub use client::{
    ClientConfig, ErrorDetails, ListingOptions, RedditClient, RedditClientError, SearchOptions,
    SortOrder, TimeRange, TransportError,
};
pub use models::RedditPayload;
