//! Feed Invariant Tests
//!
//! - Ids strictly increase and are never reused, even across eviction
//! - The feed never exceeds its capacity and evicts oldest first
//! - Blank input never creates a post
//! - Concurrent writers never share an id

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use demohub::feed::{BoundedFeed, FeedError};

// =============================================================================
// Ordering and Capacity
// =============================================================================

#[test]
fn test_ids_strictly_increase_across_evictions() {
    let feed = BoundedFeed::new(5);

    let ids: Vec<i64> = (0..50)
        .map(|n| feed.add(format!("post {}", n)).unwrap().id)
        .collect();

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids.first(), Some(&1));
    assert_eq!(ids.last(), Some(&50));
}

#[test]
fn test_length_bounded_then_exact() {
    let capacity = 7;
    let feed = BoundedFeed::new(capacity);

    for n in 0..capacity {
        feed.add(format!("{}", n)).unwrap();
        assert_eq!(feed.list().len(), n + 1);
    }

    for n in 0..20 {
        feed.add(format!("extra {}", n)).unwrap();
        assert_eq!(feed.list().len(), capacity);
    }
}

#[test]
fn test_fifo_eviction_keeps_last_c_in_order() {
    let capacity = 4;
    let feed = BoundedFeed::new(capacity);
    let texts: Vec<String> = (1..=11).map(|n| format!("t{}", n)).collect();

    for text in &texts {
        feed.add(text.clone()).unwrap();
    }

    let listed: Vec<String> = feed.list().into_iter().map(|p| p.text).collect();
    assert_eq!(listed, texts[texts.len() - capacity..].to_vec());
}

#[test]
fn test_example_scenario() {
    let feed = BoundedFeed::new(3);
    for text in ["a", "b", "c", "d"] {
        feed.add(text).unwrap();
    }

    let posts = feed.list();
    assert_eq!(
        posts.iter().map(|p| p.text.as_str()).collect::<Vec<_>>(),
        vec!["b", "c", "d"]
    );
    assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3, 4]);
}

// =============================================================================
// Input Validation
// =============================================================================

#[test]
fn test_blank_input_does_not_advance_counter() {
    let feed = BoundedFeed::new(3);
    feed.add("first").unwrap();

    assert_eq!(feed.add(""), Err(FeedError::EmptyInput));
    assert_eq!(feed.add("   "), Err(FeedError::EmptyInput));

    assert_eq!(feed.list().len(), 1);
    assert_eq!(feed.add("second").unwrap().id, 2);
}

#[test]
fn test_random_posts_share_the_counter() {
    let feed = BoundedFeed::new(3);
    feed.add("typed").unwrap();

    let random = feed.add_random().unwrap();
    assert_eq!(random.id, 2);
    assert_eq!(random.text.len(), 8);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_adds_get_unique_ids() {
    let feed = Arc::new(BoundedFeed::new(10));
    let threads = 8;
    let per_thread = 200;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let feed = Arc::clone(&feed);
            thread::spawn(move || {
                let mut ids = Vec::with_capacity(per_thread);
                for n in 0..per_thread {
                    ids.push(feed.add(format!("{}-{}", t, n)).unwrap().id);
                }
                ids
            })
        })
        .collect();

    let mut all_ids = HashSet::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        // Each writer sees its own ids in increasing order
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        all_ids.extend(ids);
    }

    let total = (threads * per_thread) as i64;
    assert_eq!(all_ids.len() as i64, total);
    assert_eq!(all_ids.iter().max(), Some(&total));

    let posts = feed.list();
    assert_eq!(posts.len(), 10);
    assert!(posts.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(posts.last().unwrap().id, total);
}

#[test]
fn test_readers_never_see_more_than_capacity() {
    let feed = Arc::new(BoundedFeed::new(3));

    let writer = {
        let feed = Arc::clone(&feed);
        thread::spawn(move || {
            for n in 0..500 {
                feed.add(format!("{}", n)).unwrap();
            }
        })
    };

    let reader = {
        let feed = Arc::clone(&feed);
        thread::spawn(move || {
            for _ in 0..500 {
                let posts = feed.list();
                assert!(posts.len() <= 3);
                assert!(posts.windows(2).all(|w| w[0].id + 1 == w[1].id));
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
}
