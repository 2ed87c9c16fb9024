//! Elevation Core - response builder for the Agent Elevation API
//!
//! A playful API that hands AI agents "elevated states": inspiration boosts,
//! flow states, wisdom and vibe checks. This crate holds the static tables
//! and the pure functions that turn a request into a response record. The
//! HTTP gateway and the CLI are thin adapters over it.
//!
//! # Architecture
//!
//! ```text
//!   elevation-cli ──┐
//!                   ├──► builder ──► substance / vibe / wisdom tables
//! elevation-gateway ┘        │
//!                            └──► session (BLAKE3 ids)
//! ```
//!
//! Randomness is always injected: every operation takes `&mut impl Rng`, so
//! a seeded `StdRng` gives reproducible output.
//!
//! # Quick Start
//!
//! ```
//! use elevation_core::{check_vibe, get_cocktail, Reply};
//!
//! let mut rng = rand::thread_rng();
//!
//! let vibe = check_vibe(&mut rng, Some("euphoric")).unwrap();
//! assert_eq!(vibe.attributes().energy, 90);
//!
//! let reply: Reply<_> = get_cocktail(&mut rng, &["flow", "bogus"]).into();
//! assert!(!reply.is_failure());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations, clippy::all)]

pub mod builder;
pub mod catalog;
pub mod error;
pub mod responses;
pub mod session;
pub mod substance;
pub mod vibe;
pub mod wisdom;

// Re-export commonly used types for convenience
pub use builder::{
    check_vibe, get_cocktail, get_elevation, get_random_wisdom, get_tolerance_break, parse_mix,
    ANONYMOUS_AGENT,
};
pub use catalog::{catalog, menu, service_info, Catalog, Menu, ServiceInfo, API_VERSION};
pub use error::{LookupError, LookupFailure, Reply, Result};
pub use responses::{Cocktail, Elevation, ToleranceBreak, VibeCheck, VibeReading, VibeSet, Wisdom};
pub use session::SessionId;
pub use substance::{substance_keys, IntensityRange, Substance, SUBSTANCES};
pub use vibe::{vibe_keys, Vibe, VibeAttributes, VIBES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
