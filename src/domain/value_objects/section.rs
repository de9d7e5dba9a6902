//! Section keys, section ordering, and per-section visibility

use serde::{Deserialize, Deserializer, Serialize};

/// One of the six named content blocks of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Main,
    About,
    Work,
    Services,
    Reviews,
    Contact,
}

impl SectionKey {
    /// Canonical order, also the default section order
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Main,
        SectionKey::About,
        SectionKey::Work,
        SectionKey::Services,
        SectionKey::Reviews,
        SectionKey::Contact,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "main" => Some(SectionKey::Main),
            "about" => Some(SectionKey::About),
            "work" => Some(SectionKey::Work),
            "services" => Some(SectionKey::Services),
            "reviews" => Some(SectionKey::Reviews),
            "contact" => Some(SectionKey::Contact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Main => "main",
            SectionKey::About => "about",
            SectionKey::Work => "work",
            SectionKey::Services => "services",
            SectionKey::Reviews => "reviews",
            SectionKey::Contact => "contact",
        }
    }

    /// Heading shown above the section
    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::Main => "Profile",
            SectionKey::About => "About",
            SectionKey::Work => "Work",
            SectionKey::Services => "Services",
            SectionKey::Reviews => "Reviews",
            SectionKey::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered list of section keys as stored on the profile.
///
/// The stored list may be malformed (loaded from old or hand-edited data).
/// [`SectionOrder::resolved`] is the only view renderers should use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionOrder(Vec<SectionKey>);

impl SectionOrder {
    pub fn new(keys: Vec<SectionKey>) -> Self {
        Self(keys)
    }

    /// Raw stored keys, possibly malformed
    pub fn raw(&self) -> &[SectionKey] {
        &self.0
    }

    /// True when the list is a full, duplicate-free permutation of all sections
    pub fn is_valid(&self) -> bool {
        self.0.len() == SectionKey::ALL.len()
            && SectionKey::ALL.iter().all(|k| self.0.contains(k))
    }

    /// The order to render with; malformed lists resolve to the default order
    pub fn resolved(&self) -> Vec<SectionKey> {
        if self.is_valid() {
            self.0.clone()
        } else {
            SectionKey::ALL.to_vec()
        }
    }

    /// Replace a malformed list with the default order in place.
    ///
    /// Returns true if the list had to be replaced.
    pub fn normalize(&mut self) -> bool {
        if self.is_valid() {
            return false;
        }
        tracing::warn!(stored = ?self.0, "section order is malformed, restoring default");
        self.0 = SectionKey::ALL.to_vec();
        true
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, key: SectionKey) -> Option<usize> {
        self.0.iter().position(|k| *k == key)
    }
}

impl Default for SectionOrder {
    fn default() -> Self {
        Self(SectionKey::ALL.to_vec())
    }
}

impl<'de> Deserialize<'de> for SectionOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Unknown or non-string entries are dropped rather than failing the
        // whole profile load; anything but a list reads as empty.
        let keys = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str().and_then(SectionKey::parse))
                .collect(),
            serde_json::Value::Null => Vec::new(),
            other => {
                tracing::debug!(section_order = %other, "section order is not a list");
                Vec::new()
            }
        };
        Ok(Self(keys))
    }
}

/// Independent visibility flag per section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionVisibility {
    pub show_main: bool,
    pub show_about: bool,
    pub show_work: bool,
    pub show_services: bool,
    pub show_reviews: bool,
    pub show_contact: bool,
}

impl SectionVisibility {
    pub fn is_visible(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Main => self.show_main,
            SectionKey::About => self.show_about,
            SectionKey::Work => self.show_work,
            SectionKey::Services => self.show_services,
            SectionKey::Reviews => self.show_reviews,
            SectionKey::Contact => self.show_contact,
        }
    }

    pub fn set(&mut self, key: SectionKey, visible: bool) {
        let flag = match key {
            SectionKey::Main => &mut self.show_main,
            SectionKey::About => &mut self.show_about,
            SectionKey::Work => &mut self.show_work,
            SectionKey::Services => &mut self.show_services,
            SectionKey::Reviews => &mut self.show_reviews,
            SectionKey::Contact => &mut self.show_contact,
        };
        *flag = visible;
    }
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            show_main: true,
            show_about: true,
            show_work: true,
            show_services: true,
            show_reviews: true,
            show_contact: true,
        }
    }
}
