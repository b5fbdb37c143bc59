//! # Tweet Feed
//!
//! Capacity-bounded, insertion-ordered feed of short text posts.
//!
//! ## Invariants
//! - Post ids are strictly increasing for the life of the feed, never reused
//! - The feed never holds more than `capacity` posts; the oldest is evicted first
//! - Blank text never produces a post and never advances the id counter

pub mod bounded;
pub mod errors;
pub mod post;

pub use bounded::{BoundedFeed, DEFAULT_FEED_CAPACITY, RANDOM_POST_LEN};
pub use errors::{FeedError, FeedResult};
pub use post::Post;
