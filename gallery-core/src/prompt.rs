//! # Prompt
//!
//! Core data structures of the gallery: the [`Prompt`] catalog entry, its [`PromptId`] key and
//! the [`Category`] selector used by the filter engine.

use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Unique key of a prompt within the catalog.
///
/// Catalog files may use either JSON strings or numbers as ids. Both are normalised to their
/// string form, which is also the key used when persisting trending counts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PromptId(String);

impl PromptId {
    pub fn new(id: impl Into<String>) -> PromptId {
        PromptId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PromptId {
    fn from(id: &str) -> Self {
        PromptId(id.to_string())
    }
}

impl From<u64> for PromptId {
    fn from(id: u64) -> Self {
        PromptId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for PromptId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => PromptId(n.to_string()),
            RawId::Text(s) => PromptId(s),
        })
    }
}

/// A single catalog entry: display metadata plus the literal text copied to the clipboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    pub description: String,
    pub prompt_text: String,
    pub category: String,
    pub image: String,
}

impl Prompt {
    pub fn new(
        id: impl Into<PromptId>,
        title: String,
        description: String,
        prompt_text: String,
        category: String,
        image: String,
    ) -> Prompt {
        Prompt {
            id: id.into(),
            title,
            description,
            prompt_text,
            category,
            image,
        }
    }
}

/// Category selector.
///
/// The selector set is closed: `All` matches every prompt, the named variants match prompts whose
/// `category` is exactly equal, and any other selector value is kept as `Unknown` and matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Men,
    Women,
    Couples,
    Unknown(String),
}

impl Category {
    /// The fixed selector set, in display order.
    pub const ALL_SELECTORS: [Category; 4] =
        [Category::All, Category::Men, Category::Women, Category::Couples];

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => "All",
            Category::Men => "Men",
            Category::Women => "Women",
            Category::Couples => "Couples",
            Category::Unknown(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }

    /// Checks whether a prompt with the given `category` field passes this selector.
    pub fn matches(&self, prompt_category: &str) -> bool {
        match self {
            Category::All => true,
            Category::Unknown(_) => false,
            named => named.as_str() == prompt_category,
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "All" => Category::All,
            "Men" => Category::Men,
            "Women" => Category::Women,
            "Couples" => Category::Couples,
            other => Category::Unknown(other.to_string()),
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
