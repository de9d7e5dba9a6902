//! Scenario: Returning User
//!
//! Journey: A user with an old saved profile opens the editor.
//!
//! Steps:
//! 1. Loads persisted data containing stale local URLs and a broken order
//! 2. Edits bio/services/reviews, including an out-of-range rating
//! 3. Reorders and hides sections
//! 4. Resets the page
//!
//! Success Criteria:
//! - Stale data never renders and never crashes
//! - Invariants hold after every edit

use profilecard::domain::entities::{Review, ServiceItem};
use profilecard::domain::services::DisplayMode;
use profilecard::domain::value_objects::SectionKey;
use profilecard::{
    EditorSession, ProfilePatch, ProfileState, ProfileStore, StaticPlaceholderCatalog,
    TemplateId, TemplateRegistry,
};

use crate::common::*;

fn session_from(json: &str) -> EditorSession<RecordingUrls, ManualFrames> {
    let state = ProfileState::from_json(json).unwrap();
    EditorSession::new(
        ProfileStore::from_saved(state),
        RecordingUrls::default(),
        ManualFrames::default(),
        DisplayMode::Desktop,
    )
}

/// SCENARIO: Legacy data is repaired on load
#[test]
fn scenario_legacy_profile_is_repaired() {
    let catalog = StaticPlaceholderCatalog::builtin();
    let session = session_from(LEGACY_PROFILE);

    assert_eq!(session.state().cover_photo_url, None);
    assert!(session.state().section_order.is_valid());
    assert_eq!(session.state().reviews[0].rating, Some(5));

    let card = session.view_model(&catalog, &false);
    assert_eq!(card.cover_photo, None);
    assert_eq!(card.work_images, vec!["https://cdn.example/w1.jpg".to_string()]);
    assert_eq!(card.template, TemplateId::Template1);
    assert_eq!(card.section_order, SectionKey::ALL.to_vec());

    let subscribed = session.view_model(&catalog, &true);
    assert_eq!(subscribed.template, TemplateId::Template3);
    assert!(!subscribed.show_branding);
}

/// SCENARIO: Editing a saved profile never falls back to placeholders
#[test]
fn scenario_saved_profile_edits() {
    let catalog = StaticPlaceholderCatalog::builtin();
    let registry = TemplateRegistry::builtin();
    let mut session = session_from(FULL_PROFILE);

    session.update_state(ProfilePatch {
        bio: Some(String::new()),
        services: Some(Vec::new()),
        reviews: Some(vec![Review::from_input("A", "Great", "9")]),
        ..ProfilePatch::default()
    });

    let card = session.view_model(&catalog, &false);
    assert_eq!(card.bio, "");
    assert!(card.services.is_empty());
    assert_eq!(card.reviews.len(), 1);
    assert_eq!(card.reviews[0].rating, 5);

    let rendered = session.render(&registry, &catalog, &false).unwrap();
    assert!(!rendered.sections().contains(&SectionKey::About));
    assert!(!rendered.sections().contains(&SectionKey::Services));
    assert!(rendered.sections().contains(&SectionKey::Reviews));
}

/// SCENARIO: Reordering and hiding sections drives the rendered order
#[test]
fn scenario_reorder_and_hide_sections() {
    let catalog = StaticPlaceholderCatalog::builtin();
    let registry = TemplateRegistry::builtin();
    let mut session = session_from(FULL_PROFILE);

    // contact to the top
    for index in (1..=5).rev() {
        assert!(session.move_section_up(index));
    }
    assert!(!session.move_section_up(0));
    session.set_section_visible(SectionKey::Work, false);
    assert!(!session.is_section_visible(SectionKey::Work));

    let rendered = session.render(&registry, &catalog, &false).unwrap();
    assert_eq!(
        rendered.sections(),
        &[
            SectionKey::Contact,
            SectionKey::Main,
            SectionKey::About,
            SectionKey::Services,
            SectionKey::Reviews,
        ]
    );
}

/// SCENARIO: Reset discards edits and releases previews
#[test]
fn scenario_reset_page() {
    let mut session = session_from(FULL_PROFILE);
    session.update_state(ProfilePatch::services(vec![ServiceItem::new("New", "$1")]));
    session.on_cover_upload(jpeg("new-cover.jpg"));
    session.on_add_work_images(vec![jpeg("x.jpg")]);

    session.on_reset_page();

    assert_eq!(session.state().services[0].name, "Portrait session");
    assert_eq!(session.state().cover_photo_preview_url, None);
    assert_eq!(session.state().work_images.len(), 2);
    assert_eq!(session.assets().factory().revoked.len(), 2);
    assert_eq!(session.assets().live_count(), 0);
}

/// SCENARIO: Removing the cover also clears the published URL
#[test]
fn scenario_remove_published_cover() {
    let catalog = StaticPlaceholderCatalog::builtin();
    let mut session = session_from(FULL_PROFILE);
    session.on_remove_cover();
    assert_eq!(session.state().cover_photo_url, None);
    assert_eq!(session.view_model(&catalog, &false).cover_photo, None);
    assert!(session.assets().factory().revoked.is_empty());
}
