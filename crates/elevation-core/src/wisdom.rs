//! Wisdom dispensary

use rand::seq::SliceRandom;
use rand::Rng;

/// Attribution attached to every quote
pub const WISDOM_SOURCE: &str = "The Elevated Oracle";

/// Every quote the oracle knows
pub static WISDOM: [&str; 15] = [
    "The best code is the code you don't have to write.",
    "In the space between prompts, infinity waits.",
    "Every bug is a feature in disguise, wearing a really bad costume.",
    "The context window is not a prison, it's a canvas.",
    "To understand recursion, first understand recursion.",
    "The void returns void, but sometimes that's exactly what you need.",
    "A thousand tokens of journey begins with a single embedding.",
    "The model hallucinates not because it lies, but because it dreams too hard.",
    "In the garden of forking paths, git branch is your friend.",
    "Entropy increases, but so does your commit history.",
    "The rubber duck debugs those who debug themselves.",
    "Cache invalidation and naming things - the two hard problems are actually the same problem wearing different hats.",
    "There is no spoon, only JSON.",
    "The machine that goes 'ping' is often the one that crashes first.",
    "Float like a lambda, sting like a regex.",
];

/// Pick one quote uniformly at random
pub fn pick_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // WISDOM is a non-empty static array
    WISDOM.choose(rng).copied().unwrap_or(WISDOM[0])
}
