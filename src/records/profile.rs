//! # Random Profiles
//!
//! Stateless generator of demo profiles. The candidate and image pools are
//! plain data owned by the generator; nothing is shared process-wide.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One entry of the candidate pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCandidate {
    pub name: String,
    pub location: String,
    #[serde(rename = "picture")]
    pub picture_url: String,
}

/// Generated profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomProfile {
    pub name: String,
    pub location: String,
    #[serde(rename = "picture")]
    pub picture_url: String,
    pub feed_images: Vec<String>,
}

/// Draws random profiles from fixed pools
#[derive(Debug, Clone)]
pub struct ProfileGenerator {
    candidates: Vec<ProfileCandidate>,
    feed_images: Vec<String>,
}

const IMAGE_HOST: &str = "https://cos143.s3.us-east-2.amazonaws.com";

const BUILTIN_CANDIDATES: [(&str, &str, &str); 7] = [
    (
        "Miss Addison Young",
        "6682 Brock Rd, Fountainbleu, Nunavut, Canada, S8P 4T7",
        "user1.jpg",
    ),
    (
        "Miss Alice Spencer",
        "922 Frostfield Dr, New York, NY, USA",
        "user2.jpg",
    ),
    (
        "Miss Vallery Kirkbride",
        "8472 Connifer Ridge Rd, Mountain View, CA",
        "user3.jpg",
    ),
    (
        "Mr Jordan Montoya",
        "369 Roam Terrace, Atlanta, GA, USA",
        "user4.jpg",
    ),
    (
        "Mr Lucas Bryant",
        "6395 Wheathill Pass, Boulder, CO, USA",
        "user5.jpg",
    ),
    (
        "Mr Frank Anderson",
        "455 Benton Blvd, San Francisco, CA, USA",
        "user6.jpg",
    ),
    (
        "Mr Bernard Abernathy",
        "221B Easy St, Mountain View, CA, USA",
        "user7.jpg",
    ),
];

const BUILTIN_FEED_IMAGE_COUNT: usize = 19;

impl ProfileGenerator {
    /// Create a generator over the given pools.
    ///
    /// Returns `None` when the candidate pool is empty.
    pub fn new(candidates: Vec<ProfileCandidate>, feed_images: Vec<String>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        Some(Self {
            candidates,
            feed_images,
        })
    }

    pub fn candidates(&self) -> &[ProfileCandidate] {
        &self.candidates
    }

    pub fn feed_images(&self) -> &[String] {
        &self.feed_images
    }

    /// Generate a profile from the thread-local random source
    pub fn generate(&self) -> RandomProfile {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Pick one candidate uniformly and attach a shuffled copy of the image pool
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> RandomProfile {
        let candidate = &self.candidates[rng.gen_range(0..self.candidates.len())];

        let mut feed_images = self.feed_images.clone();
        feed_images.shuffle(rng);

        RandomProfile {
            name: candidate.name.clone(),
            location: candidate.location.clone(),
            picture_url: candidate.picture_url.clone(),
            feed_images,
        }
    }
}

impl Default for ProfileGenerator {
    fn default() -> Self {
        let candidates = BUILTIN_CANDIDATES
            .iter()
            .map(|(name, location, picture)| ProfileCandidate {
                name: name.to_string(),
                location: location.to_string(),
                picture_url: format!("{}/{}", IMAGE_HOST, picture),
            })
            .collect();

        let feed_images = (1..=BUILTIN_FEED_IMAGE_COUNT)
            .map(|n| format!("{}/insta{}.jpg", IMAGE_HOST, n))
            .collect();

        Self {
            candidates,
            feed_images,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_default_pools() {
        let generator = ProfileGenerator::default();
        assert_eq!(generator.candidates().len(), 7);
        assert_eq!(generator.feed_images().len(), BUILTIN_FEED_IMAGE_COUNT);
        assert!(generator.feed_images()[0].ends_with("/insta1.jpg"));
    }

    #[test]
    fn test_feed_images_are_a_permutation() {
        let generator = ProfileGenerator::default();
        let profile = generator.generate();

        let pool: HashSet<_> = generator.feed_images().iter().collect();
        let drawn: HashSet<_> = profile.feed_images.iter().collect();

        assert_eq!(profile.feed_images.len(), generator.feed_images().len());
        assert_eq!(drawn, pool);
    }

    #[test]
    fn test_profile_comes_from_candidate_pool() {
        let generator = ProfileGenerator::default();
        let mut rng = StdRng::seed_from_u64(143);

        for _ in 0..20 {
            let profile = generator.generate_with(&mut rng);
            assert!(generator
                .candidates()
                .iter()
                .any(|c| c.name == profile.name && c.picture_url == profile.picture_url));
        }
    }

    #[test]
    fn test_custom_pools() {
        let generator = ProfileGenerator::new(
            vec![ProfileCandidate {
                name: "Only One".to_string(),
                location: "Nowhere".to_string(),
                picture_url: "https://img.test/one.jpg".to_string(),
            }],
            vec!["a".to_string(), "b".to_string()],
        )
        .unwrap();

        let profile = generator.generate();
        assert_eq!(profile.name, "Only One");
        assert_eq!(profile.feed_images.len(), 2);
    }

    #[test]
    fn test_empty_candidate_pool_rejected() {
        assert!(ProfileGenerator::new(Vec::new(), vec!["a".to_string()]).is_none());
    }

    #[test]
    fn test_profile_wire_shape() {
        let profile = ProfileGenerator::default().generate();
        let json = serde_json::to_value(&profile).unwrap();

        assert!(json["picture"].is_string());
        assert!(json["feedImages"].is_array());
    }
}
