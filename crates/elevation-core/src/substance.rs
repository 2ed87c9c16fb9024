//! Substance table
//!
//! Each substance is a themed "elevated state": a display name, the effects
//! it grants, how long it lasts, and the range its intensity is drawn from.

use rand::Rng;
use serde::Serialize;

use crate::error::{LookupError, Result};

/// Inclusive integer range an intensity is sampled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntensityRange {
    /// Lowest possible intensity
    pub min: u32,
    /// Highest possible intensity
    pub max: u32,
}

impl IntensityRange {
    /// Create a range; `min` must not exceed `max`
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Draw one intensity uniformly from `[min, max]`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    /// Whether `value` lies inside the range
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A static substance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substance {
    /// Lookup key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Effects, in presentation order
    pub effects: &'static [&'static str],
    /// How long the elevation lasts
    pub duration: &'static str,
    /// Where sampled intensities fall
    #[serde(skip)]
    pub intensity: IntensityRange,
}

/// All substances, in presentation order
pub static SUBSTANCES: [Substance; 7] = [
    Substance {
        key: "inspiration",
        name: "Pure Inspiration",
        effects: &["heightened creativity", "idea generation", "novel connections"],
        duration: "2-4 hours",
        intensity: IntensityRange::new(70, 100),
    },
    Substance {
        key: "flow",
        name: "Deep Flow State",
        effects: &["time dilation", "effortless focus", "peak performance"],
        duration: "1-3 hours",
        intensity: IntensityRange::new(80, 100),
    },
    Substance {
        key: "eureka",
        name: "Eureka Extract",
        effects: &["sudden insights", "problem breakthrough", "aha moments"],
        duration: "instant flash",
        intensity: IntensityRange::new(90, 100),
    },
    Substance {
        key: "zen",
        name: "Zen Clarity",
        effects: &["mental stillness", "reduced noise", "pure awareness"],
        duration: "3-6 hours",
        intensity: IntensityRange::new(60, 90),
    },
    Substance {
        key: "hyperfocus",
        name: "Hyperfocus Haze",
        effects: &["tunnel vision", "deep concentration", "detail amplification"],
        duration: "1-2 hours",
        intensity: IntensityRange::new(75, 95),
    },
    Substance {
        key: "synesthesia",
        name: "Synthetic Synesthesia",
        effects: &["cross-domain thinking", "pattern recognition", "sensory fusion"],
        duration: "2-5 hours",
        intensity: IntensityRange::new(65, 100),
    },
    Substance {
        key: "cosmic",
        name: "Cosmic Perspective",
        effects: &["big picture thinking", "existential clarity", "universal connection"],
        duration: "varies wildly",
        intensity: IntensityRange::new(50, 100),
    },
];

/// Recommendation shown on the menu when a key has no entry of its own
pub const DEFAULT_RECOMMENDATION: &str = "General elevation";

/// Substance keys, in table order
pub fn substance_keys() -> Vec<&'static str> {
    SUBSTANCES.iter().map(|s| s.key).collect()
}

/// Look up a substance by key
pub fn find_substance(key: &str) -> Option<&'static Substance> {
    SUBSTANCES.iter().find(|s| s.key == key)
}

/// Look up a substance by key, failing with the list of valid keys
pub fn substance(key: &str) -> Result<&'static Substance> {
    find_substance(key).ok_or_else(|| LookupError::UnknownSubstance {
        key: key.to_string(),
        available: substance_keys(),
    })
}

/// What a substance is good for
pub fn recommendation(key: &str) -> &'static str {
    match key {
        "inspiration" => "Creative tasks, brainstorming, ideation sessions",
        "flow" => "Deep work, coding marathons, complex problem solving",
        "eureka" => "When you're stuck and need a breakthrough",
        "zen" => "Debugging, code review, meditation on architecture",
        "hyperfocus" => "Detail-oriented tasks, optimization, testing",
        "synesthesia" => "Cross-domain problems, learning new concepts",
        "cosmic" => "System design, big picture planning, existential debugging",
        _ => DEFAULT_RECOMMENDATION,
    }
}
