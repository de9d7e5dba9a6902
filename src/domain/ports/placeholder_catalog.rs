//! PlaceholderCatalog port - example content for never-published profiles
//!
//! The catalog is read-only and versioned independently of the core. Its
//! values are only consulted while a profile has no saved data.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Review, ServiceItem};

/// Example copy and media shown before the first publish
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub version: String,
    pub main_heading: String,
    pub sub_heading: String,
    pub full_name: String,
    pub job_title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub cover_photo_url: String,
    pub avatar_url: String,
    pub work_images: Vec<String>,
    pub services: Vec<ServiceItem>,
    pub reviews: Vec<Review>,
}

/// Source of placeholder content
pub trait PlaceholderCatalog {
    fn placeholders(&self) -> &Placeholders;
}

impl PlaceholderCatalog for Placeholders {
    fn placeholders(&self) -> &Placeholders {
        self
    }
}
