//! # Bounded Feed
//!
//! A FIFO-evicting list of posts with a monotonic id counter.
//!
//! A single mutex serializes `add` and `list`. Callers may block on
//! contention but never observe a lock error. A poisoned lock is recovered;
//! no critical section leaves the state half-updated.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rand::Rng;

use super::errors::{FeedError, FeedResult};
use super::post::Post;

/// Default number of posts retained by a feed
pub const DEFAULT_FEED_CAPACITY: usize = 42;

/// Length of the text generated by [`BoundedFeed::add_random`]
pub const RANDOM_POST_LEN: usize = 8;

const RANDOM_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Default)]
struct FeedState {
    items: VecDeque<Post>,
    /// Last id handed out. Only ever increases.
    counter: i64,
}

/// Capacity-bounded, thread-safe feed of posts
#[derive(Debug)]
pub struct BoundedFeed {
    capacity: usize,
    state: Mutex<FeedState>,
}

impl BoundedFeed {
    /// Create an empty feed that retains at most `capacity` posts
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(FeedState::default()),
        }
    }

    /// Maximum number of retained posts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of posts currently retained
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// Whether the feed currently holds no posts
    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Append a post with the given text.
    ///
    /// Rejects empty or whitespace-only text without touching the counter.
    /// If the feed is over capacity afterwards, the oldest post is evicted.
    pub fn add(&self, text: impl Into<String>) -> FeedResult<Post> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(FeedError::EmptyInput);
        }

        let mut state = self.lock();
        state.counter += 1;

        let post = Post {
            id: state.counter,
            text,
            created_at: Utc::now(),
        };

        state.items.push_back(post.clone());
        if state.items.len() > self.capacity {
            state.items.pop_front();
        }

        Ok(post)
    }

    /// Append a post of [`RANDOM_POST_LEN`] random ASCII letters
    pub fn add_random(&self) -> FeedResult<Post> {
        self.add(random_text(&mut rand::thread_rng(), RANDOM_POST_LEN))
    }

    /// Snapshot of the retained posts, oldest first
    pub fn list(&self) -> Vec<Post> {
        self.lock().items.iter().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BoundedFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}

fn random_text<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| RANDOM_ALPHABET[rng.gen_range(0..RANDOM_ALPHABET.len())] as char)
        .collect()
}
