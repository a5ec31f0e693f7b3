//! Operations module provides the CLI-facing flows over [`RedditClient`](crate::client::RedditClient)

pub mod posts;

pub use posts::{handle_command, PostsOperation, PostsOptions, PostsRequest, PostsResult};
