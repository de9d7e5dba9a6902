//! Value Objects
//!
//! Immutable domain types with validation and lenient parsing.

pub mod media_url;
pub mod presentation;
pub mod rating;
pub mod section;
pub mod template_id;

pub use media_url::{MediaUrl, Provenance, LOCAL_URL_SCHEME};
pub use presentation::{ButtonTextColor, PageTheme, SocialPlatform, TextAlignment};
pub use rating::{clamp_stored, display_rating, parse_rating, MAX_RATING, MIN_RATING};
pub use section::{SectionKey, SectionOrder, SectionVisibility};
pub use template_id::TemplateId;
