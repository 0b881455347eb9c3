use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which collections a search returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryTab {
    #[default]
    All,
    Templates,
    Archetypes,
    Components,
    Resources,
}

impl GalleryTab {
    pub const ALL: [GalleryTab; 5] = [
        GalleryTab::All,
        GalleryTab::Templates,
        GalleryTab::Archetypes,
        GalleryTab::Components,
        GalleryTab::Resources,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryTab::All => "all",
            GalleryTab::Templates => "templates",
            GalleryTab::Archetypes => "archetypes",
            GalleryTab::Components => "components",
            GalleryTab::Resources => "resources",
        }
    }

    /// Whether results for `collection` are shown on this tab
    pub fn shows(&self, collection: GalleryTab) -> bool {
        *self == GalleryTab::All || *self == collection
    }
}

impl fmt::Display for GalleryTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown gallery tab '{0}' (expected all, templates, archetypes, components or resources)")]
pub struct UnknownTab(pub String);

impl FromStr for GalleryTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        GalleryTab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == lowered)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Search parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryQuery {
    /// Keyword; empty matches everything
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub tab: GalleryTab,

    /// Exact (case-insensitive) category; entries without a category never match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl GalleryQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn tab(mut self, tab: GalleryTab) -> Self {
        self.tab = tab;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
