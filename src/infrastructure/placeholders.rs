//! Placeholder catalogs
//!
//! A built-in catalog ships with the crate; deployments can override it with
//! a TOML file whose keys mirror [`Placeholders`].

use std::fs;
use std::path::Path;

use crate::domain::entities::{Review, ServiceItem};
use crate::domain::ports::{PlaceholderCatalog, Placeholders};
use crate::error::{CardError, CardResult};

pub const BUILTIN_CATALOG_VERSION: &str = "2024.1";

/// Example content shipped with the crate
pub fn builtin_placeholders() -> Placeholders {
    Placeholders {
        version: BUILTIN_CATALOG_VERSION.to_string(),
        main_heading: "Let's work together".to_string(),
        sub_heading: "Book a session or say hello".to_string(),
        full_name: "Alex Morgan".to_string(),
        job_title: "Brand Photographer".to_string(),
        bio: "I help small businesses tell their story with honest, natural imagery."
            .to_string(),
        email: "hello@example.com".to_string(),
        phone: "+1 555 0100".to_string(),
        cover_photo_url: "https://assets.profilecard.dev/placeholders/cover.jpg".to_string(),
        avatar_url: "https://assets.profilecard.dev/placeholders/avatar.jpg".to_string(),
        work_images: (1..=4)
            .map(|i| format!("https://assets.profilecard.dev/placeholders/work-{i}.jpg"))
            .collect(),
        services: vec![
            ServiceItem::new("Portrait session", "$150"),
            ServiceItem::new("Product shoot", "$300"),
            ServiceItem::new("Event coverage", "From $800"),
        ],
        reviews: vec![
            Review::new("Jamie", "Fast, friendly, and the photos were stunning.", Some(5)),
            Review::new("Priya", "Made our whole team look great.", Some(4)),
        ],
    }
}

/// Placeholder catalog held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlaceholderCatalog {
    placeholders: Placeholders,
}

impl StaticPlaceholderCatalog {
    pub fn builtin() -> Self {
        Self {
            placeholders: builtin_placeholders(),
        }
    }

    pub fn from_placeholders(placeholders: Placeholders) -> Self {
        Self { placeholders }
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> CardResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> CardResult<Self> {
        let placeholders: Placeholders =
            toml::from_str(content).map_err(|e| CardError::InvalidPlaceholders {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!(
            file = %path.display(),
            version = %placeholders.version,
            "loaded placeholder catalog"
        );
        Ok(Self { placeholders })
    }
}

impl Default for StaticPlaceholderCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PlaceholderCatalog for StaticPlaceholderCatalog {
    fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }
}
