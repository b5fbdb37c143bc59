//! # Secret Hashing
//!
//! Salted Argon2id hashing for record secrets.
//!
//! Hashes are PHC strings: algorithm, cost parameters and the per-record
//! salt travel with the hash, so verification always uses the parameters a
//! secret was hashed with.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use super::errors::{RecordError, RecordResult};

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParams {
    /// Memory cost in KiB
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,

    /// Number of passes
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Degree of parallelism
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

fn default_memory_kib() -> u32 {
    Params::DEFAULT_M_COST
}

fn default_iterations() -> u32 {
    Params::DEFAULT_T_COST
}

fn default_parallelism() -> u32 {
    Params::DEFAULT_P_COST
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl HashParams {
    /// Smallest parameters Argon2 accepts. Only suitable for tests.
    pub fn minimal() -> Self {
        Self {
            memory_kib: Params::MIN_M_COST,
            iterations: Params::MIN_T_COST,
            parallelism: Params::MIN_P_COST,
        }
    }

    fn to_argon2(self) -> RecordResult<Params> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| RecordError::InvalidHashParams(e.to_string()))
    }
}

/// Hashes and verifies secrets with Argon2id
#[derive(Debug)]
pub struct SecretHasher {
    params: Params,
    /// Hash verified against when no record exists, so a miss costs the same
    /// as a wrong secret.
    decoy: String,
}

const DECOY_SECRET: &str = "decoy secret, never a valid credential";

impl SecretHasher {
    /// Create a hasher with the given cost parameters
    pub fn new(params: HashParams) -> RecordResult<Self> {
        let mut hasher = Self {
            params: params.to_argon2()?,
            decoy: String::new(),
        };
        hasher.decoy = hasher.hash(DECOY_SECRET)?;
        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a secret with a fresh random salt
    pub fn hash(&self, secret: &str) -> RecordResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| RecordError::HashingFailed)
    }

    /// Check a secret against a stored hash. Malformed hashes never match.
    pub fn verify(&self, secret: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2()
                .verify_password(secret.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Burn one verification's worth of work and report a mismatch
    pub fn verify_absent(&self, secret: &str) -> bool {
        let _ = self.verify(secret, &self.decoy);
        false
    }
}
