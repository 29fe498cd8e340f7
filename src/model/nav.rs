use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A link card, either inside a group or held by a card tray.
pub struct NavItem {
    /// Stable card identifier.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Target URL.
    #[serde(default)]
    pub url: String,
    /// Icon reference (URL, data URI, or empty).
    #[serde(default)]
    pub icon: String,
    /// Whether the card is visible to anonymous visitors.
    #[serde(default)]
    pub is_public: bool,
    /// Every other field, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavItem {
    /// Build a card with only an id set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A titled group of link cards.
pub struct NavGroup {
    /// Stable group identifier.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Cards in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
    /// Every other field, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
