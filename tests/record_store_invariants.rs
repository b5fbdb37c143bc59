//! Record Store Invariant Tests
//!
//! - A key is inserted at most once, even under concurrent adds
//! - Verification succeeds only for the original secret
//! - Unknown identifiers and wrong secrets look the same to callers
//! - Random profiles carry a permutation of the image pool

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use demohub::records::{
    HashParams, KeyedRecordStore, NewRecord, ProfileGenerator, RecordError, RecordStoreConfig,
    DEFAULT_CONTACT_FIELD,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn store() -> KeyedRecordStore {
    let config = RecordStoreConfig {
        hash: HashParams::minimal(),
        ..Default::default()
    };
    KeyedRecordStore::new(config, ProfileGenerator::default()).unwrap()
}

fn user(identifier: &str, secret: &str) -> NewRecord {
    NewRecord::new(identifier, secret)
        .with_attribute(DEFAULT_CONTACT_FIELD, "555-0100")
        .with_attribute("fullName", "Test User")
}

// =============================================================================
// Uniqueness
// =============================================================================

#[test]
fn test_second_add_rejected_first_secret_kept() {
    let store = store();
    store.add("cse143", user("alice", "secret1")).unwrap();

    assert_eq!(
        store.add("cse143", user("alice", "secret2")),
        Err(RecordError::AlreadyExists)
    );
    assert_eq!(store.list("cse143").len(), 1);
    assert!(store.verify_secret("cse143", "alice", "secret1"));
    assert!(!store.verify_secret("cse143", "alice", "secret2"));
}

#[test]
fn test_concurrent_add_race_has_one_winner() {
    let store = Arc::new(store());
    let contenders = 16;
    let barrier = Arc::new(Barrier::new(contenders));

    let handles: Vec<_> = (0..contenders)
        .map(|n| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.add("race", user("contested", &format!("secret-{}", n)))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let losers = results
        .iter()
        .filter(|r| **r == Err(RecordError::AlreadyExists))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(losers, contenders - 1);
    assert_eq!(store.list("race").len(), 1);
    assert_eq!(store.len(), 1);

    let winning_secret = results
        .iter()
        .position(|r| r.is_ok())
        .map(|n| format!("secret-{}", n))
        .unwrap();
    assert!(store.verify_secret("race", "contested", &winning_secret));
}

#[test]
fn test_concurrent_distinct_keys_all_inserted() {
    let store = Arc::new(store());

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.add("ns", user(&format!("user{}", n), "pw")))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let ids: HashSet<_> = store.list("ns").into_iter().map(|r| r.identifier).collect();
    assert_eq!(ids.len(), 8);
}

// =============================================================================
// Verification
// =============================================================================

#[test]
fn test_secret_verification() {
    let store = store();
    store.add("ns", user("alice", "hunter2")).unwrap();

    assert!(store.verify_secret("ns", "alice", "hunter2"));
    assert!(!store.verify_secret("ns", "alice", "wrong"));
    assert!(!store.verify_secret("ns", "bob", "anything"));
}

#[test]
fn test_missing_fields_rejected_before_storage() {
    let store = store();

    for record in [
        user("", "pw"),
        user("alice", ""),
        NewRecord::new("alice", "pw"),
        user(" \n", "pw"),
    ] {
        assert_eq!(store.add("ns", record), Err(RecordError::MissingFields));
    }

    assert!(store.is_empty());
    assert!(!store.verify_secret("ns", "alice", "pw"));
}

#[test]
fn test_listed_records_expose_no_plaintext() {
    let store = store();
    store.add("ns", user("alice", "hunter2")).unwrap();

    let json = serde_json::to_string(&store.list("ns")).unwrap();
    assert!(!json.contains("hunter2"));
    assert!(!json.contains("argon2"));
    assert!(json.contains("alice"));
}

// =============================================================================
// Random Profiles
// =============================================================================

#[test]
fn test_random_profile_images_are_permutation() {
    let store = store();
    let pool: HashSet<String> = ProfileGenerator::default()
        .feed_images()
        .iter()
        .cloned()
        .collect();

    for _ in 0..10 {
        let profile = store.random_profile();
        let images: HashSet<String> = profile.feed_images.iter().cloned().collect();

        assert_eq!(profile.feed_images.len(), pool.len());
        assert_eq!(images, pool);
    }
}
