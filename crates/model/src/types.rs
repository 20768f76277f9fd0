//! Core domain types for the portal.
//!
//! Residents and meals are normalized records: whatever shape the remote
//! APIs use on the wire, the rest of the workspace only ever sees these
//! structs. Identity is the string id; all other facets are immutable per
//! fetch.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// Both remote APIs are normalized to string ids, and task ids are minted
// locally as strings. The aliases keep signatures readable.

/// Unique identifier for a resident (stringified from the directory API).
pub type ResidentId = String;

/// Unique identifier for a meal (as returned by the recipe API).
pub type MealId = String;

/// Unique identifier for a task (minted locally).
pub type TaskId = String;

// =============================================================================
// Resident
// =============================================================================

/// A directory entry normalized from the external user-directory API.
///
/// The mapping from the wire shape lives in the `api-client` crate:
/// `company.name` becomes `company`, `company.catchPhrase` becomes
/// `catchphrase`, `company.bs` becomes `business`, and `address.city`
/// becomes `city`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    pub id: ResidentId,
    pub name: String,
    pub email: String,
    pub city: String,
    pub company: String,
    pub catchphrase: String,
    pub business: String,
    /// Portrait URL, if the directory ever supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Decorative emoji shown on resident cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

// =============================================================================
// Meal
// =============================================================================

/// A recipe entry normalized from the external recipe-search API.
///
/// The up-to-20 positional ingredient fields of the wire shape are collapsed
/// into `ingredients`: trimmed, empty entries dropped, original order kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub category: String,
    pub origin: String,
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// =============================================================================
// Theme
// =============================================================================

/// The two portal color themes.
///
/// Serialized lowercase ("cupcake" / "aqua") to match the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Cupcake,
    Aqua,
}

impl Theme {
    /// The other theme. Toggling twice is the identity.
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Cupcake => Theme::Aqua,
            Theme::Aqua => Theme::Cupcake,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Cupcake => "cupcake",
            Theme::Aqua => "aqua",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cupcake" => Ok(Theme::Cupcake),
            "aqua" => Ok(Theme::Aqua),
            other => Err(format!("unknown theme '{other}', expected 'cupcake' or 'aqua'")),
        }
    }
}
