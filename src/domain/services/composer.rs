//! View model composition
//!
//! `compose` is a pure function of the profile, the visibility flags, the
//! account flags, and the placeholder catalog. Every field is resolved by an
//! explicit precedence list:
//!
//! 1. session preview URL (media only, live session assets only)
//! 2. persisted value, unless it is a transient local reference
//! 3. placeholder value, only while the profile has never been saved
//! 4. empty

use crate::domain::entities::{
    PresentationView, ProfileState, ReviewView, ServiceView, SocialLinkView, ViewModel,
};
use crate::domain::ports::{PlaceholderCatalog, Placeholders};
use crate::domain::value_objects::{
    display_rating, MediaUrl, Provenance, SectionVisibility, TemplateId,
};

/// Account-level inputs to composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposeFlags {
    /// The profile has been published at least once
    pub has_saved_data: bool,
    /// The account may use non-default templates
    pub subscribed: bool,
}

/// One step of a field's fallback chain
#[derive(Debug, Clone, Copy)]
enum Candidate<'a> {
    Preview(Option<&'a MediaUrl>),
    Persisted(Option<&'a MediaUrl>),
    Placeholder(&'a str),
}

impl<'a> Candidate<'a> {
    fn accept(self, has_saved_data: bool) -> Option<&'a str> {
        let value = match self {
            Candidate::Preview(url) => url
                .filter(|u| u.is_session_preview())
                .map(MediaUrl::as_str),
            Candidate::Persisted(url) => url.filter(|u| !u.is_transient()).map(MediaUrl::as_str),
            Candidate::Placeholder(value) => (!has_saved_data).then_some(value),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

fn resolve_media(chain: &[Candidate<'_>], has_saved_data: bool) -> Option<String> {
    chain
        .iter()
        .find_map(|candidate| candidate.accept(has_saved_data))
        .map(str::to_string)
}

fn resolve_text(value: &str, placeholder: &str, has_saved_data: bool) -> String {
    if !value.trim().is_empty() {
        value.to_string()
    } else if !has_saved_data {
        placeholder.to_string()
    } else {
        String::new()
    }
}

/// Non-empty user collection wins; an empty one falls back only pre-publish
fn resolve_collection<T>(
    user: Vec<T>,
    placeholder: impl FnOnce() -> Vec<T>,
    has_saved_data: bool,
) -> Vec<T> {
    if !user.is_empty() {
        user
    } else if !has_saved_data {
        placeholder()
    } else {
        Vec::new()
    }
}

/// Template the card is actually rendered with
pub fn effective_template(stored: TemplateId, subscribed: bool) -> TemplateId {
    if subscribed || stored.is_free() {
        stored
    } else {
        TemplateId::default()
    }
}

/// Derive the render-ready view model
pub fn compose(
    state: &ProfileState,
    visibility: &SectionVisibility,
    flags: ComposeFlags,
    catalog: &dyn PlaceholderCatalog,
) -> ViewModel {
    let p: &Placeholders = catalog.placeholders();
    let saved = flags.has_saved_data;

    let cover_photo = resolve_media(
        &[
            Candidate::Preview(state.cover_photo_preview_url.as_ref()),
            Candidate::Persisted(state.cover_photo_url.as_ref()),
            Candidate::Placeholder(&p.cover_photo_url),
        ],
        saved,
    );
    let avatar = resolve_media(
        &[
            Candidate::Preview(state.avatar_preview_url.as_ref()),
            Candidate::Persisted(state.avatar_url.as_ref()),
            Candidate::Placeholder(&p.avatar_url),
        ],
        saved,
    );

    let user_work: Vec<String> = state
        .work_images
        .iter()
        .filter_map(|img| {
            resolve_media(
                &[
                    Candidate::Preview(Some(&img.url)),
                    Candidate::Persisted(Some(&img.url)),
                ],
                saved,
            )
        })
        .collect();
    let work_images = resolve_collection(user_work, || p.work_images.clone(), saved);

    let services = resolve_collection(state.services.clone(), || p.services.clone(), saved)
        .into_iter()
        .map(|s| ServiceView {
            name: s.name,
            price: s.price,
        })
        .collect();

    let reviews = resolve_collection(state.reviews.clone(), || p.reviews.clone(), saved)
        .into_iter()
        .map(|r| ReviewView {
            name: r.name,
            text: r.text,
            rating: display_rating(r.rating),
        })
        .collect();

    let social_links = state
        .active_social_links()
        .map(|(platform, url)| SocialLinkView {
            platform,
            url: url.to_string(),
        })
        .collect();

    let template = effective_template(state.template_id, flags.subscribed);
    if template != state.template_id {
        tracing::debug!(
            stored = %state.template_id,
            effective = %template,
            "template not entitled, rendering default"
        );
    }

    ViewModel {
        template,
        main_heading: resolve_text(&state.main_heading, &p.main_heading, saved),
        sub_heading: resolve_text(&state.sub_heading, &p.sub_heading, saved),
        full_name: resolve_text(&state.full_name, &p.full_name, saved),
        job_title: resolve_text(&state.job_title, &p.job_title, saved),
        bio: resolve_text(&state.bio, &p.bio, saved),
        email: resolve_text(&state.email, &p.email, saved),
        phone: resolve_text(&state.phone, &p.phone, saved),
        cover_photo,
        avatar,
        contact_photo: state
            .avatar_url
            .as_ref()
            .filter(|url| url.provenance() == Provenance::Remote)
            .map(|url| url.as_str().to_string()),
        work_images,
        services,
        reviews,
        social_links,
        section_order: state.section_order.resolved(),
        visibility: *visibility,
        presentation: PresentationView {
            page_theme: state.page_theme,
            font: state.font.clone(),
            button_bg_color: state.button_bg_color.clone(),
            button_text_color: state.button_text_color,
            text_alignment: state.text_alignment,
        },
        show_branding: !flags.subscribed,
    }
}
