//! Elevation session identifiers
//!
//! A session id is an opaque, short token handed back with every elevation.
//! It is never stored or looked up again, so it only has to look unique:
//! the current time and a random draw are hashed with BLAKE3 and the hex
//! digest is cut to [`SESSION_ID_LEN`] characters.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::Serialize;

/// Length of a session id in hex characters
pub const SESSION_ID_LEN: usize = 16;

/// Opaque per-elevation token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh id from the wall clock and `rng`
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();
        Self::from_seed(&format!("{}-{}", now, rng.gen::<f64>()))
    }

    /// Derive the id for a given seed string
    pub fn from_seed(seed: &str) -> Self {
        let digest = blake3::hash(seed.as_bytes()).to_hex();
        Self(digest.as_str()[..SESSION_ID_LEN].to_string())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
