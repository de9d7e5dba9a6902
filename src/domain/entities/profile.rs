//! ProfileState entity - the canonical, user-edited profile
//!
//! The persisted shape uses camelCase keys. Preview URLs are session-only and
//! are never serialized.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::{
    clamp_stored, parse_rating, ButtonTextColor, MediaUrl, PageTheme, SectionOrder,
    SectionVisibility, SocialPlatform, TemplateId, TextAlignment,
};

/// Maximum number of work images a profile can hold
pub const MAX_WORK_IMAGES: usize = 10;

/// A service offered on the card
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    pub name: String,
    pub price: String,
}

impl ServiceItem {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }
}

/// A customer review
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub name: String,
    pub text: String,
    /// Empty, or an integer in `[1, 5]` once written through the store
    #[serde(deserialize_with = "deserialize_rating")]
    pub rating: Option<i64>,
}

impl Review {
    pub fn new(name: impl Into<String>, text: impl Into<String>, rating: Option<i64>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            rating,
        }
    }

    /// Build a review from raw editor input, coercing the rating text
    pub fn from_input(name: impl Into<String>, text: impl Into<String>, rating: &str) -> Self {
        Self::new(name, text, parse_rating(rating))
    }

    /// Clamp the rating into the stored range
    pub fn sanitized(mut self) -> Self {
        self.rating = clamp_stored(self.rating);
        self
    }
}

/// An image in the work gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkImage {
    pub url: MediaUrl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl WorkImage {
    pub fn new(url: MediaUrl, file_name: Option<String>) -> Self {
        Self { url, file_name }
    }
}

/// The canonical profile for one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileState {
    pub main_heading: String,
    pub sub_heading: String,
    pub full_name: String,
    pub job_title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo_url: Option<MediaUrl>,
    #[serde(skip)]
    pub cover_photo_preview_url: Option<MediaUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<MediaUrl>,
    #[serde(skip)]
    pub avatar_preview_url: Option<MediaUrl>,
    pub work_images: Vec<WorkImage>,

    pub services: Vec<ServiceItem>,
    pub reviews: Vec<Review>,
    #[serde(deserialize_with = "deserialize_social_links")]
    pub social_links: BTreeMap<SocialPlatform, String>,

    pub template_id: TemplateId,
    pub section_order: SectionOrder,
    pub visibility: SectionVisibility,

    pub page_theme: PageTheme,
    pub font: String,
    pub button_bg_color: String,
    pub button_text_color: ButtonTextColor,
    pub text_alignment: TextAlignment,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            main_heading: String::new(),
            sub_heading: String::new(),
            full_name: String::new(),
            job_title: String::new(),
            bio: String::new(),
            email: String::new(),
            phone: String::new(),
            cover_photo_url: None,
            cover_photo_preview_url: None,
            avatar_url: None,
            avatar_preview_url: None,
            work_images: Vec::new(),
            services: Vec::new(),
            reviews: Vec::new(),
            social_links: BTreeMap::new(),
            template_id: TemplateId::default(),
            section_order: SectionOrder::default(),
            visibility: SectionVisibility::default(),
            page_theme: PageTheme::default(),
            font: default_font(),
            button_bg_color: default_button_bg_color(),
            button_text_color: ButtonTextColor::default(),
            text_alignment: TextAlignment::default(),
        }
    }
}

fn default_font() -> String {
    "Inter".to_string()
}

fn default_button_bg_color() -> String {
    "#111827".to_string()
}

impl ProfileState {
    /// Parse a persisted profile (JSON)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Social links with a non-empty URL, in platform order
    pub fn active_social_links(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        self.social_links
            .iter()
            .map(|(platform, url)| (*platform, url.trim()))
            .filter(|(_, url)| !url.is_empty())
    }
}

/// Ratings may be stored as numbers or numeric text. Anything else reads as
/// empty. Numeric values are kept as-is so the store's clamp stays visible.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let rating = match &raw {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
        }),
        serde_json::Value::String(text) => parse_rating(text),
        _ => None,
    };
    if rating.is_none() && !raw.is_null() {
        tracing::debug!(rating = %raw, "unreadable rating, leaving it empty");
    }
    Ok(rating)
}

fn deserialize_social_links<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<SocialPlatform, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Object(raw) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(raw
        .iter()
        .filter_map(|(key, url)| {
            let platform = SocialPlatform::parse(key)?;
            let url = url.as_str()?.trim().to_string();
            (!url.is_empty()).then_some((platform, url))
        })
        .collect())
}

/// Shallow-merge update applied by the editor.
///
/// Every `Some` field replaces the corresponding state field wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub main_heading: Option<String>,
    pub sub_heading: Option<String>,
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cover_photo_url: Option<Option<MediaUrl>>,
    pub avatar_url: Option<Option<MediaUrl>>,
    pub work_images: Option<Vec<WorkImage>>,
    pub services: Option<Vec<ServiceItem>>,
    pub reviews: Option<Vec<Review>>,
    pub social_links: Option<BTreeMap<SocialPlatform, String>>,
    pub section_order: Option<SectionOrder>,
    pub visibility: Option<SectionVisibility>,
    pub page_theme: Option<PageTheme>,
    pub font: Option<String>,
    pub button_bg_color: Option<String>,
    pub button_text_color: Option<ButtonTextColor>,
    pub text_alignment: Option<TextAlignment>,
}

impl ProfilePatch {
    pub fn bio(bio: impl Into<String>) -> Self {
        Self {
            bio: Some(bio.into()),
            ..Self::default()
        }
    }

    pub fn services(services: Vec<ServiceItem>) -> Self {
        Self {
            services: Some(services),
            ..Self::default()
        }
    }

    pub fn reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Some(reviews),
            ..Self::default()
        }
    }
}
