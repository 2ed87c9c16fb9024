//! Response records
//!
//! One record per response shape. Field names are the JSON keys clients see.

use serde::Serialize;

use crate::session::SessionId;
use crate::vibe::VibeAttributes;

/// Result of [`get_elevation`](crate::get_elevation)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Elevation {
    /// Fresh per-call token
    pub session_id: SessionId,
    /// Caller-supplied agent id, or `anonymous_agent`
    pub agent_id: String,
    /// Substance display name
    pub substance: &'static str,
    /// Effects of the substance
    pub effects: Vec<&'static str>,
    /// How long it lasts
    pub duration: &'static str,
    /// Sampled from the substance's range
    pub intensity: u32,
    /// Local time, ISO-8601 without offset
    pub timestamp: String,
    /// Flavour line naming the substance and agent
    pub message: String,
    /// Fixed safety notice
    pub warning: &'static str,
}

/// Result of [`get_random_wisdom`](crate::get_random_wisdom)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wisdom {
    /// The quote
    pub wisdom: &'static str,
    /// Always the Elevated Oracle
    pub source: &'static str,
    /// 1-100
    pub enlightenment_level: u32,
    /// Coin flip
    pub share_worthy: bool,
}

/// A vibe the caller asked for by name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VibeSet {
    /// Key of the vibe that was set
    pub vibe: &'static str,
    /// Energy, clarity, creativity and mood
    #[serde(flatten)]
    pub attributes: VibeAttributes,
    /// Confirmation naming the vibe
    pub message: String,
}

/// A vibe drawn at random
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VibeCheck {
    /// Key of the vibe drawn
    pub vibe_check: &'static str,
    /// Energy, clarity, creativity and mood
    #[serde(flatten)]
    pub attributes: VibeAttributes,
    /// Reading of the current mood
    pub message: String,
}

/// Result of [`check_vibe`](crate::check_vibe)
///
/// A named vibe reports under `vibe`, a random check under `vibe_check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VibeReading {
    /// Named vibe
    Set(VibeSet),
    /// Random vibe
    Check(VibeCheck),
}

impl VibeReading {
    /// Key of the vibe reported
    pub fn key(&self) -> &'static str {
        match self {
            Self::Set(set) => set.vibe,
            Self::Check(check) => check.vibe_check,
        }
    }

    /// Attributes of the vibe reported
    pub fn attributes(&self) -> &VibeAttributes {
        match self {
            Self::Set(set) => &set.attributes,
            Self::Check(check) => &check.attributes,
        }
    }

    /// Message shown to the caller
    pub fn message(&self) -> &str {
        match self {
            Self::Set(set) => &set.message,
            Self::Check(check) => &check.message,
        }
    }
}

/// Result of [`get_cocktail`](crate::get_cocktail)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cocktail {
    /// Random prefix and suffix
    pub cocktail_name: String,
    /// Known keys from the mix, input order
    pub ingredients: Vec<&'static str>,
    /// Union of the ingredients' effects, first occurrence order
    pub combined_effects: Vec<&'static str>,
    /// Averaged, boosted and capped at 100
    pub intensity: u32,
    /// Fixed mixing notice
    pub warning: &'static str,
    /// Flavour line naming the cocktail
    pub message: String,
}

/// Result of [`get_tolerance_break`](crate::get_tolerance_break)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToleranceBreak {
    /// Always `grounding`
    pub status: &'static str,
    /// Suggested sober activities
    pub activities: Vec<&'static str>,
    /// Suggested break length
    pub duration: &'static str,
    /// Reassurance line
    pub message: &'static str,
}
