//! ViewModel entity - the fully resolved data a template renders
//!
//! Produced by `domain::services::composer::compose`; templates only read it.

use serde::Serialize;

use crate::domain::value_objects::{
    ButtonTextColor, PageTheme, SectionKey, SectionVisibility, SocialPlatform, TemplateId,
    TextAlignment, MAX_RATING,
};

/// A service line ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceView {
    pub name: String,
    pub price: String,
}

/// A review ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewView {
    pub name: String,
    pub text: String,
    /// Clamped to `[0, 5]`
    pub rating: u8,
}

impl ReviewView {
    /// Number of filled and empty star glyphs
    pub fn stars(&self) -> (u8, u8) {
        let filled = self.rating.min(MAX_RATING as u8);
        (filled, MAX_RATING as u8 - filled)
    }
}

/// A social link ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinkView {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Visual options carried through unchanged from the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationView {
    pub page_theme: PageTheme,
    pub font: String,
    pub button_bg_color: String,
    pub button_text_color: ButtonTextColor,
    pub text_alignment: TextAlignment,
}

/// Render-ready profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub template: TemplateId,
    pub main_heading: String,
    pub sub_heading: String,
    pub full_name: String,
    pub job_title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub cover_photo: Option<String>,
    pub avatar: Option<String>,
    /// The persisted remote avatar, safe to hand out beyond this session
    pub contact_photo: Option<String>,
    pub work_images: Vec<String>,
    pub services: Vec<ServiceView>,
    pub reviews: Vec<ReviewView>,
    pub social_links: Vec<SocialLinkView>,
    pub section_order: Vec<SectionKey>,
    pub visibility: SectionVisibility,
    pub presentation: PresentationView,
    /// Free-tier cards carry a "made with" footer
    pub show_branding: bool,
}

impl ViewModel {
    /// Whether a section has anything to show, independent of visibility
    pub fn has_content(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Main => true,
            SectionKey::About => !self.bio.trim().is_empty(),
            SectionKey::Work => !self.work_images.is_empty(),
            SectionKey::Services => !self.services.is_empty(),
            SectionKey::Reviews => !self.reviews.is_empty(),
            SectionKey::Contact => self.has_contact_channel(),
        }
    }

    pub fn has_contact_channel(&self) -> bool {
        !self.email.trim().is_empty()
            || !self.phone.trim().is_empty()
            || !self.social_links.is_empty()
    }

    /// Name shown on the card; falls back to the main heading
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.main_heading
        } else {
            &self.full_name
        }
    }
}
