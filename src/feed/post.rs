//! Feed post model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single post in the feed.
///
/// Posts are created only by [`BoundedFeed::add`](super::BoundedFeed::add) and
/// are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Feed-assigned id, strictly increasing
    pub id: i64,

    /// Post body
    #[serde(rename = "tweetText")]
    pub text: String,

    /// When the post was accepted by the feed
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}
