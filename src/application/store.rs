//! Profile store
//!
//! Holds the canonical [`ProfileState`] for one editing session. Every write
//! goes through [`ProfileStore::update`] (or the media slot setters used by
//! the editor session), and every write re-establishes the profile
//! invariants:
//!
//! - review ratings are empty or integers in `[1, 5]`
//! - `cover_photo_url` / `avatar_url` never hold a transient URL
//! - at most [`MAX_WORK_IMAGES`] work images
//! - the section order is a full permutation
//! - social links have non-blank URLs

use crate::domain::entities::{ProfilePatch, ProfileState, Review, MAX_WORK_IMAGES};
use crate::domain::ports::EntitlementSource;
use crate::domain::services::{move_down, move_up, select_template, SelectionOutcome};
use crate::domain::value_objects::{MediaUrl, SectionKey, TemplateId};

/// Single-image media fields on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Cover,
    Avatar,
}

impl MediaSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaSlot::Cover => "cover",
            MediaSlot::Avatar => "avatar",
        }
    }
}

/// Canonical profile state plus the last published snapshot
#[derive(Debug, Clone)]
pub struct ProfileStore {
    state: ProfileState,
    seed: ProfileState,
    has_saved_data: bool,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Store for a profile that has never been published
    pub fn new() -> Self {
        Self {
            state: ProfileState::default(),
            seed: ProfileState::default(),
            has_saved_data: false,
        }
    }

    /// Store seeded from persisted data
    pub fn from_saved(mut state: ProfileState) -> Self {
        sanitize(&mut state);
        Self {
            seed: state.clone(),
            state,
            has_saved_data: true,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// True once the profile has been published at least once
    pub fn has_saved_data(&self) -> bool {
        self.has_saved_data
    }

    /// Shallow-merge a patch into the state
    pub fn update(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            main_heading,
            sub_heading,
            full_name,
            job_title,
            bio,
            email,
            phone,
            cover_photo_url,
            avatar_url,
            work_images,
            services,
            reviews,
            social_links,
            section_order,
            visibility,
            page_theme,
            font,
            button_bg_color,
            button_text_color,
            text_alignment,
        } = patch;

        let s = &mut self.state;
        if let Some(v) = main_heading {
            s.main_heading = v;
        }
        if let Some(v) = sub_heading {
            s.sub_heading = v;
        }
        if let Some(v) = full_name {
            s.full_name = v;
        }
        if let Some(v) = job_title {
            s.job_title = v;
        }
        if let Some(v) = bio {
            s.bio = v;
        }
        if let Some(v) = email {
            s.email = v;
        }
        if let Some(v) = phone {
            s.phone = v;
        }
        if let Some(v) = cover_photo_url {
            s.cover_photo_url = v;
        }
        if let Some(v) = avatar_url {
            s.avatar_url = v;
        }
        if let Some(v) = work_images {
            s.work_images = v;
        }
        if let Some(v) = services {
            s.services = v;
        }
        if let Some(v) = reviews {
            s.reviews = v;
        }
        if let Some(v) = social_links {
            s.social_links = v;
        }
        if let Some(v) = section_order {
            s.section_order = v;
        }
        if let Some(v) = visibility {
            s.visibility = v;
        }
        if let Some(v) = page_theme {
            s.page_theme = v;
        }
        if let Some(v) = font {
            s.font = v;
        }
        if let Some(v) = button_bg_color {
            s.button_bg_color = v;
        }
        if let Some(v) = button_text_color {
            s.button_text_color = v;
        }
        if let Some(v) = text_alignment {
            s.text_alignment = v;
        }

        sanitize(&mut self.state);
    }

    /// Discard unpublished edits, returning to the last published snapshot
    pub fn reset(&mut self) {
        tracing::debug!(has_saved_data = self.has_saved_data, "resetting profile");
        self.state = self.seed.clone();
    }

    /// Record a successful publish of `state`
    pub fn mark_published(&mut self, mut state: ProfileState) {
        state.cover_photo_preview_url = None;
        state.avatar_preview_url = None;
        sanitize(&mut state);
        self.seed = state.clone();
        self.state = state;
        self.has_saved_data = true;
    }

    /// Set the session preview for a media slot, returning the one it replaces
    pub fn set_preview(&mut self, slot: MediaSlot, url: Option<MediaUrl>) -> Option<MediaUrl> {
        let field = match slot {
            MediaSlot::Cover => &mut self.state.cover_photo_preview_url,
            MediaSlot::Avatar => &mut self.state.avatar_preview_url,
        };
        std::mem::replace(field, url)
    }

    /// Clear both the preview and the persisted URL of a media slot
    pub fn clear_media(&mut self, slot: MediaSlot) -> Option<MediaUrl> {
        match slot {
            MediaSlot::Cover => self.state.cover_photo_url = None,
            MediaSlot::Avatar => self.state.avatar_url = None,
        }
        self.set_preview(slot, None)
    }

    pub fn move_section_up(&mut self, index: usize) -> bool {
        move_up(&mut self.state.section_order, index)
    }

    pub fn move_section_down(&mut self, index: usize) -> bool {
        move_down(&mut self.state.section_order, index)
    }

    pub fn set_section_visible(&mut self, key: SectionKey, visible: bool) {
        self.state.visibility.set(key, visible);
    }

    pub fn is_section_visible(&self, key: SectionKey) -> bool {
        self.state.visibility.is_visible(key)
    }

    /// Select a template through the entitlement gate
    pub fn select_template(
        &mut self,
        requested: TemplateId,
        entitlement: &dyn EntitlementSource,
        on_upgrade: &mut dyn FnMut(TemplateId),
    ) -> SelectionOutcome {
        select_template(
            &mut self.state.template_id,
            requested,
            entitlement,
            on_upgrade,
        )
    }
}

/// Re-establish the profile invariants in place
fn sanitize(state: &mut ProfileState) {
    for (slot, field) in [
        (MediaSlot::Cover, &mut state.cover_photo_url),
        (MediaSlot::Avatar, &mut state.avatar_url),
    ] {
        if field.as_ref().is_some_and(MediaUrl::is_transient) {
            tracing::warn!(
                slot = slot.as_str(),
                url = %field.as_ref().map(MediaUrl::as_str).unwrap_or_default(),
                "dropping transient url written to canonical field"
            );
            *field = None;
        }
    }

    if state.work_images.len() > MAX_WORK_IMAGES {
        tracing::debug!(
            count = state.work_images.len(),
            max = MAX_WORK_IMAGES,
            "truncating work images"
        );
        state.work_images.truncate(MAX_WORK_IMAGES);
    }

    state.reviews = std::mem::take(&mut state.reviews)
        .into_iter()
        .map(Review::sanitized)
        .collect();

    state.section_order.normalize();

    state.social_links.retain(|platform, url| {
        let keep = !url.trim().is_empty();
        if !keep {
            tracing::debug!(platform = %platform, "dropping blank social link");
        }
        keep
    });
}
