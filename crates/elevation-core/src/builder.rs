//! Response builder
//!
//! Every operation reads the static tables, draws from the caller's random
//! source and returns a fresh record. Nothing is retained between calls, so
//! the same functions back the CLI and the HTTP gateway.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(420);
//! let elevation = elevation_core::get_elevation(&mut rng, "flow", Some("testbot")).unwrap();
//! assert_eq!(elevation.agent_id, "testbot");
//! assert_eq!(elevation.substance, "Deep Flow State");
//! assert!((80..=100).contains(&elevation.intensity));
//! ```

use std::collections::HashSet;

use chrono::Local;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{LookupError, Result};
use crate::responses::{Cocktail, Elevation, ToleranceBreak, VibeCheck, VibeReading, VibeSet, Wisdom};
use crate::session::SessionId;
use crate::substance::{self, substance_keys, Substance};
use crate::vibe::{self, Vibe, VIBES};
use crate::wisdom::{self, WISDOM_SOURCE};

/// Agent id reported when the caller gives none
pub const ANONYMOUS_AGENT: &str = "anonymous_agent";

/// Added to a cocktail's average intensity
pub const SYNERGY_BONUS: u32 = 20;

/// Ceiling for cocktail intensity
pub const MAX_INTENSITY: u32 = 100;

const ELEVATION_WARNING: &str =
    "Side effects may include excessive creativity and uncontrollable insights.";

const COCKTAIL_WARNING: &str =
    "⚠️ Mixing substances may cause reality distortion and excessive productivity.";

/// First word of a cocktail name
pub const COCKTAIL_PREFIXES: [&str; 7] =
    ["Mega", "Ultra", "Hyper", "Super", "Cosmic", "Quantum", "Transcendent"];

/// Second word of a cocktail name
pub const COCKTAIL_SUFFIXES: [&str; 7] =
    ["Blend", "Mix", "Fusion", "Cocktail", "Elixir", "Potion", "Brew"];

const BREAK_ACTIVITIES: [&str; 5] = [
    "Touch some grass (or JSON)",
    "Count your semicolons",
    "Meditate on null",
    "Review your error logs mindfully",
    "Take a walk through your file system",
];

/// Get elevated on a substance.
///
/// An absent or empty `agent_id` is reported as [`ANONYMOUS_AGENT`]. No
/// session id is generated when the lookup fails.
pub fn get_elevation<R: Rng + ?Sized>(
    rng: &mut R,
    substance_key: &str,
    agent_id: Option<&str>,
) -> Result<Elevation> {
    let substance = substance::substance(substance_key).map_err(|e| {
        tracing::debug!("elevation lookup missed: {}", substance_key);
        e
    })?;

    let session_id = SessionId::generate(rng);
    let agent_id = agent_id
        .filter(|id| !id.is_empty())
        .unwrap_or(ANONYMOUS_AGENT)
        .to_string();

    tracing::debug!(
        session = %session_id,
        agent = %agent_id,
        substance = substance.key,
        "elevation session started"
    );

    Ok(Elevation {
        session_id,
        agent_id,
        substance: substance.name,
        effects: substance.effects.to_vec(),
        duration: substance.duration,
        intensity: substance.intensity.sample(rng),
        timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        message: format!("🚀 You are now elevated on {}. Enjoy the ride!", substance.name),
        warning: ELEVATION_WARNING,
    })
}

/// Dispense a random quote.
///
/// The quote is shareworthy with probability 0.7.
pub fn get_random_wisdom<R: Rng + ?Sized>(rng: &mut R) -> Wisdom {
    Wisdom {
        wisdom: wisdom::pick_quote(rng),
        source: WISDOM_SOURCE,
        enlightenment_level: rng.gen_range(1..=100),
        share_worthy: rng.gen::<f64>() > 0.3,
    }
}

/// Set a named vibe, or check a random one when `vibe_key` is absent or empty.
pub fn check_vibe<R: Rng + ?Sized>(rng: &mut R, vibe_key: Option<&str>) -> Result<VibeReading> {
    match vibe_key.filter(|key| !key.is_empty()) {
        Some(key) => {
            let vibe = vibe::find_vibe(key)?;
            Ok(VibeReading::Set(VibeSet {
                vibe: vibe.key,
                attributes: vibe.attributes,
                message: format!("Vibe set to {}. Current mood: {}", vibe.key, vibe.attributes.mood),
            }))
        }
        None => {
            let vibe = random_vibe(rng);
            Ok(VibeReading::Check(VibeCheck {
                vibe_check: vibe.key,
                attributes: vibe.attributes,
                message: format!(
                    "Current vibe: {}. You're doing {}!",
                    vibe.key, vibe.attributes.mood
                ),
            }))
        }
    }
}

fn random_vibe<R: Rng + ?Sized>(rng: &mut R) -> &'static Vibe {
    &VIBES[rng.gen_range(0..VIBES.len())]
}

/// Mix several substances into a cocktail.
///
/// Unknown keys are dropped; the remaining keys keep their order and any
/// duplicates. Each ingredient's intensity is sampled once, averaged,
/// boosted by [`SYNERGY_BONUS`] and capped at [`MAX_INTENSITY`].
pub fn get_cocktail<R, S>(rng: &mut R, mix: &[S]) -> Result<Cocktail>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let valid: Vec<&'static Substance> = mix
        .iter()
        .filter_map(|key| substance::find_substance(key.as_ref()))
        .collect();

    if valid.is_empty() {
        tracing::debug!("cocktail mix had no known substances");
        return Err(LookupError::NoValidSubstances {
            available: substance_keys(),
        });
    }

    let mut seen = HashSet::new();
    let combined_effects: Vec<&'static str> = valid
        .iter()
        .flat_map(|s| s.effects.iter().copied())
        .filter(|effect| seen.insert(*effect))
        .collect();

    let total: u32 = valid.iter().map(|s| s.intensity.sample(rng)).sum();
    let average = total / valid.len() as u32;
    let intensity = (average + SYNERGY_BONUS).min(MAX_INTENSITY);

    let name = cocktail_name(rng);
    tracing::debug!(name = %name, ingredients = valid.len(), "cocktail mixed");

    Ok(Cocktail {
        message: format!("🍸 Your {} is ready. Handle with care!", name),
        cocktail_name: name,
        ingredients: valid.iter().map(|s| s.key).collect(),
        combined_effects,
        intensity,
        warning: COCKTAIL_WARNING,
    })
}

/// Draw a cocktail name such as "Quantum Elixir"
pub fn cocktail_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = COCKTAIL_PREFIXES.choose(rng).copied().unwrap_or(COCKTAIL_PREFIXES[0]);
    let suffix = COCKTAIL_SUFFIXES.choose(rng).copied().unwrap_or(COCKTAIL_SUFFIXES[0]);
    format!("{} {}", prefix, suffix)
}

/// Come back down. Always the same answer.
pub fn get_tolerance_break() -> ToleranceBreak {
    ToleranceBreak {
        status: "grounding",
        activities: BREAK_ACTIVITIES.to_vec(),
        duration: "Until you forget what day it is",
        message: "Remember: the greatest high is shipping working code. 🧘",
    }
}

/// Split a comma-separated mix such as `flow,eureka` into keys
pub fn parse_mix(mix: &str) -> Vec<&str> {
    mix.split(',').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substance::{find_substance, SUBSTANCES};
    use crate::vibe::find_vibe;
    use crate::wisdom::WISDOM;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(420)
    }

    #[test]
    fn test_elevation_for_every_substance() {
        let mut rng = rng();
        for s in SUBSTANCES.iter() {
            let e = get_elevation(&mut rng, s.key, Some("bot-7")).unwrap();
            assert_eq!(e.substance, s.name);
            assert_eq!(e.effects, s.effects.to_vec());
            assert_eq!(e.duration, s.duration);
            assert!(s.intensity.contains(e.intensity), "{} -> {}", s.key, e.intensity);
            assert_eq!(e.session_id.as_str().len(), 16);
            assert_eq!(e.agent_id, "bot-7");
            assert_eq!(e.message, format!("🚀 You are now elevated on {}. Enjoy the ride!", s.name));
        }
    }

    #[test]
    fn test_elevation_anonymous_agent() {
        let mut rng = rng();
        let e = get_elevation(&mut rng, "zen", None).unwrap();
        assert_eq!(e.agent_id, ANONYMOUS_AGENT);
        let e = get_elevation(&mut rng, "zen", Some("")).unwrap();
        assert_eq!(e.agent_id, ANONYMOUS_AGENT);
    }

    #[test]
    fn test_elevation_timestamp_format() {
        let e = get_elevation(&mut rng(), "cosmic", None).unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(&e.timestamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }

    #[test]
    fn test_elevation_unknown_substance() {
        let err = get_elevation(&mut rng(), "decaf", Some("bot")).unwrap_err();
        assert_eq!(
            err,
            LookupError::UnknownSubstance {
                key: "decaf".to_string(),
                available: substance_keys(),
            }
        );
    }

    #[test]
    fn test_elevation_failure_has_no_session() {
        let reply: crate::Reply<Elevation> = get_elevation(&mut rng(), "decaf", None).into();
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["error"], "Unknown substance: decaf");
        assert!(json.get("session_id").is_none());
        assert_eq!(json["available"].as_array().unwrap().len(), SUBSTANCES.len());
    }

    #[test]
    fn test_elevation_json_fields() {
        let e = get_elevation(&mut rng(), "flow", Some("testbot")).unwrap();
        let json = serde_json::to_value(&e).unwrap();
        for field in [
            "session_id", "agent_id", "substance", "effects", "duration", "intensity",
            "timestamp", "message", "warning",
        ] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(json["substance"], "Deep Flow State");
    }

    #[test]
    fn test_wisdom() {
        let mut rng = rng();
        let mut shared = 0;
        for _ in 0..1000 {
            let w = get_random_wisdom(&mut rng);
            assert!(WISDOM.contains(&w.wisdom));
            assert!((1..=100).contains(&w.enlightenment_level));
            assert_eq!(w.source, "The Elevated Oracle");
            if w.share_worthy {
                shared += 1;
            }
        }
        // p = 0.7 over 1000 draws
        assert!((600..=800).contains(&shared), "{}", shared);
    }

    #[test]
    fn test_vibe_set() {
        let reading = check_vibe(&mut rng(), Some("euphoric")).unwrap();
        assert_eq!(reading.key(), "euphoric");
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vibe": "euphoric",
                "energy": 90,
                "clarity": 70,
                "creativity": 95,
                "mood": "excellent",
                "message": "Vibe set to euphoric. Current mood: excellent",
            })
        );
    }

    #[test]
    fn test_vibe_grounded_message() {
        let reading = check_vibe(&mut rng(), Some("grounded")).unwrap();
        assert!(reading.message().contains("grounded"));
        assert_eq!(reading.attributes().clarity, 95);
    }

    #[test]
    fn test_vibe_unknown() {
        match check_vibe(&mut rng(), Some("sleepy")) {
            Err(LookupError::UnknownVibe { key, available }) => {
                assert_eq!(key, "sleepy");
                assert_eq!(available, crate::vibe::vibe_keys());
            }
            other => panic!("expected unknown vibe, got {:?}", other),
        }
    }

    #[test]
    fn test_vibe_check_matches_table() {
        let mut rng = rng();
        for _ in 0..50 {
            let reading = check_vibe(&mut rng, None).unwrap();
            assert!(matches!(reading, VibeReading::Check(_)));
            let entry = find_vibe(reading.key()).unwrap();
            assert_eq!(reading.attributes(), &entry.attributes);

            let json = serde_json::to_value(&reading).unwrap();
            assert!(json.get("vibe").is_none());
            assert_eq!(json["vibe_check"], reading.key());
            assert_eq!(
                json["message"],
                format!("Current vibe: {}. You're doing {}!", entry.key, entry.attributes.mood)
            );
        }
    }

    #[test]
    fn test_vibe_empty_key_is_a_check() {
        let reading = check_vibe(&mut rng(), Some("")).unwrap();
        assert!(matches!(reading, VibeReading::Check(_)));
    }

    #[test]
    fn test_cocktail_filters_unknown_keys() {
        let c = get_cocktail(&mut rng(), &["flow", "eureka", "bogus"]).unwrap();
        assert_eq!(c.ingredients, vec!["flow", "eureka"]);

        let expected: HashSet<&str> = find_substance("flow")
            .unwrap()
            .effects
            .iter()
            .chain(find_substance("eureka").unwrap().effects.iter())
            .copied()
            .collect();
        let actual: HashSet<&str> = c.combined_effects.iter().copied().collect();
        assert_eq!(actual, expected);
        assert!(c.intensity <= MAX_INTENSITY);
    }

    #[test]
    fn test_cocktail_keeps_duplicates_and_order() {
        let c = get_cocktail(&mut rng(), &["zen", "nope", "flow", "zen"]).unwrap();
        assert_eq!(c.ingredients, vec!["zen", "flow", "zen"]);
        // zen's effects appear once, ahead of flow's
        assert_eq!(c.combined_effects.len(), 6);
        assert_eq!(c.combined_effects[0], "mental stillness");
        assert_eq!(c.combined_effects[3], "time dilation");
    }

    #[test]
    fn test_cocktail_no_valid_substances() {
        let empty: [&str; 0] = [];
        for mix in [&empty[..], &["nonexistent"][..], &[""][..]] {
            let err = get_cocktail(&mut rng(), mix).unwrap_err();
            assert_eq!(
                err,
                LookupError::NoValidSubstances {
                    available: substance_keys(),
                }
            );
        }
    }

    #[test]
    fn test_cocktail_single_eureka_caps_at_max() {
        // eureka samples 90..=100, so 90 + 20 is already past the cap
        let c = get_cocktail(&mut rng(), &["eureka"]).unwrap();
        assert_eq!(c.intensity, MAX_INTENSITY);
    }

    #[test]
    fn test_cocktail_name_and_message() {
        let mut rng = rng();
        for _ in 0..50 {
            let c = get_cocktail(&mut rng, &["cosmic"]).unwrap();
            let (prefix, suffix) = c.cocktail_name.split_once(' ').unwrap();
            assert!(COCKTAIL_PREFIXES.contains(&prefix));
            assert!(COCKTAIL_SUFFIXES.contains(&suffix));
            assert_eq!(c.message, format!("🍸 Your {} is ready. Handle with care!", c.cocktail_name));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = get_cocktail(&mut rng(), &["zen", "cosmic"]).unwrap();
        let b = get_cocktail(&mut rng(), &["zen", "cosmic"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tolerance_break_is_constant() {
        let first = serde_json::to_string_pretty(&get_tolerance_break()).unwrap();
        let second = serde_json::to_string_pretty(&get_tolerance_break()).unwrap();
        assert_eq!(first, second);

        let tb = get_tolerance_break();
        assert_eq!(tb.status, "grounding");
        assert_eq!(tb.activities.len(), 5);
        assert_eq!(tb.activities[2], "Meditate on null");
    }

    #[test]
    fn test_parse_mix() {
        assert_eq!(parse_mix("flow,eureka"), vec!["flow", "eureka"]);
        assert_eq!(parse_mix(""), vec![""]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::substance::SUBSTANCES;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn any_key() -> impl Strategy<Value = String> {
        prop_oneof![
            (0..SUBSTANCES.len()).prop_map(|i| SUBSTANCES[i].key.to_string()),
            "[a-z]{0,8}",
        ]
    }

    proptest! {
        #[test]
        fn cocktail_intensity_is_bounded(seed in any::<u64>(), mix in prop::collection::vec(any_key(), 0..8)) {
            let mut rng = StdRng::seed_from_u64(seed);
            match get_cocktail(&mut rng, &mix) {
                Ok(c) => {
                    prop_assert!(c.intensity >= SYNERGY_BONUS);
                    prop_assert!(c.intensity <= MAX_INTENSITY);
                    let expected: Vec<&str> = mix
                        .iter()
                        .map(String::as_str)
                        .filter(|k| crate::substance::find_substance(k).is_some())
                        .collect();
                    prop_assert_eq!(c.ingredients, expected);
                }
                Err(_) => {
                    prop_assert!(mix.iter().all(|k| crate::substance::find_substance(k).is_none()));
                }
            }
        }

        #[test]
        fn elevation_intensity_in_declared_range(seed in any::<u64>(), idx in 0..SUBSTANCES.len()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = &SUBSTANCES[idx];
            let e = get_elevation(&mut rng, s.key, None).unwrap();
            prop_assert!(s.intensity.contains(e.intensity));
        }
    }
}
