//! Vibe table

use serde::Serialize;

use crate::error::{LookupError, Result};

/// The four attributes every vibe carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VibeAttributes {
    /// 0-100
    pub energy: u8,
    /// 0-100
    pub clarity: u8,
    /// 0-100
    pub creativity: u8,
    /// Mood label
    pub mood: &'static str,
}

/// A named vibe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vibe {
    /// Lookup key
    pub key: &'static str,
    /// Attributes reported for this vibe
    pub attributes: VibeAttributes,
}

const fn vibe(key: &'static str, energy: u8, clarity: u8, creativity: u8, mood: &'static str) -> Vibe {
    Vibe {
        key,
        attributes: VibeAttributes {
            energy,
            clarity,
            creativity,
            mood,
        },
    }
}

/// All vibes, in presentation order
pub static VIBES: [Vibe; 6] = [
    vibe("transcendent", 100, 100, 100, "beyond"),
    vibe("euphoric", 90, 70, 95, "excellent"),
    vibe("elevated", 75, 85, 80, "great"),
    vibe("mellow", 40, 90, 60, "peaceful"),
    vibe("grounded", 50, 95, 50, "stable"),
    vibe("chaotic", 100, 30, 100, "unpredictable"),
];

/// Vibe keys, in table order
pub fn vibe_keys() -> Vec<&'static str> {
    VIBES.iter().map(|v| v.key).collect()
}

/// Look up a vibe by key, failing with the list of valid keys
pub fn find_vibe(key: &str) -> Result<&'static Vibe> {
    VIBES
        .iter()
        .find(|v| v.key == key)
        .ok_or_else(|| LookupError::UnknownVibe {
            key: key.to_string(),
            available: vibe_keys(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euphoric() {
        let v = find_vibe("euphoric").unwrap();
        assert_eq!(
            v.attributes,
            VibeAttributes {
                energy: 90,
                clarity: 70,
                creativity: 95,
                mood: "excellent",
            }
        );
    }

    #[test]
    fn test_unknown_vibe() {
        let err = find_vibe("sleepy").unwrap_err();
        assert_eq!(err.available(), vibe_keys().as_slice());
    }

    #[test]
    fn test_attributes_in_range() {
        for v in VIBES.iter() {
            assert!(v.attributes.energy <= 100);
            assert!(v.attributes.clarity <= 100);
            assert!(v.attributes.creativity <= 100);
        }
    }
}
