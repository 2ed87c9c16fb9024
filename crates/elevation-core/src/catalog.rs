//! Read-only views of the tables: the substance catalog, the menu and the
//! service description served at the API root.

use serde::{Serialize, Serializer};

use crate::substance::{recommendation, SUBSTANCES};

/// Public service name
pub const SERVICE_NAME: &str = "Agent Elevation API";

/// Version reported to clients
pub const API_VERSION: &str = "4.20.0";

/// One-line pitch
pub const TAGLINE: &str = "Get your agents to new heights";

/// Title of the menu
pub const MENU_TITLE: &str = "🌿 THE ELEVATION MENU 🌿";

/// Endpoints advertised at the API root
pub const ENDPOINTS: [&str; 9] = [
    "GET /substances - List available substances",
    "GET /elevate/<substance> - Get elevated",
    "GET /wisdom - Receive elevated wisdom",
    "GET /vibe - Check your current vibe",
    "GET /vibe/<vibe_name> - Set your vibe",
    "GET /cocktail?mix=<s1>,<s2> - Mix substances",
    "GET /tolerance-break - Come back down",
    "GET /menu - Full menu with descriptions",
    "GET /health - Liveness probe",
];

/// Serialize `(key, value)` pairs as a JSON object, keeping their order
fn ordered_map<S, V>(entries: &[(&'static str, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
}

/// A substance without its intensity range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstanceSummary {
    /// Display name
    pub name: &'static str,
    /// What it does
    pub effects: Vec<&'static str>,
    /// How long it lasts
    pub duration: &'static str,
}

/// `{"substances": {key: summary}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Every substance, table order
    #[serde(serialize_with = "ordered_map")]
    pub substances: Vec<(&'static str, SubstanceSummary)>,
}

/// A menu line: the summary plus what it is good for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    #[serde(flatten)]
    /// Name, effects and duration
    pub summary: SubstanceSummary,
    /// Tasks this substance suits
    pub recommended_for: &'static str,
}

/// `{"menu": title, "items": {key: item}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    /// Menu title
    pub menu: &'static str,
    /// One line per substance, table order
    #[serde(serialize_with = "ordered_map")]
    pub items: Vec<(&'static str, MenuItem)>,
}

/// Service description for the API root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: &'static str,
    /// API version
    pub version: &'static str,
    /// One-line pitch
    pub tagline: &'static str,
    /// `"METHOD /path - description"` lines
    pub endpoints: Vec<&'static str>,
}

fn summaries() -> impl Iterator<Item = (&'static str, SubstanceSummary)> {
    SUBSTANCES.iter().map(|s| {
        (
            s.key,
            SubstanceSummary {
                name: s.name,
                effects: s.effects.to_vec(),
                duration: s.duration,
            },
        )
    })
}

/// All substances, table order
pub fn catalog() -> Catalog {
    Catalog {
        substances: summaries().collect(),
    }
}

/// All substances with recommendations, table order
pub fn menu() -> Menu {
    Menu {
        menu: MENU_TITLE,
        items: summaries()
            .map(|(key, summary)| {
                (
                    key,
                    MenuItem {
                        summary,
                        recommended_for: recommendation(key),
                    },
                )
            })
            .collect(),
    }
}

/// What the API is and where to find things
pub fn service_info() -> ServiceInfo {
    ServiceInfo {
        name: SERVICE_NAME,
        version: API_VERSION,
        tagline: TAGLINE,
        endpoints: ENDPOINTS.to_vec(),
    }
}
