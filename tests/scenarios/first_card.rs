//! Scenario: First Card
//!
//! Journey: A new user builds and publishes their first card.
//!
//! Steps:
//! 1. Opens the editor - the preview shows placeholder content
//! 2. Uploads a cover photo, then changes their mind and picks another
//! 3. Adds eleven work images in one go
//! 4. Tries a paid template and is asked to upgrade
//! 5. Publishes
//!
//! Success Criteria:
//! - Every preview URL is released exactly once
//! - The published profile only contains remote URLs

use profilecard::domain::services::{DisplayMode, SelectionOutcome};
use profilecard::domain::value_objects::SectionKey;
use profilecard::{
    EditorSession, MediaUrl, ProfilePatch, ProfileStore, StaticPlaceholderCatalog, TemplateId,
    TemplateRegistry,
};

use crate::common::*;

fn new_session() -> EditorSession<RecordingUrls, ManualFrames> {
    EditorSession::new(
        ProfileStore::new(),
        RecordingUrls::default(),
        ManualFrames::default(),
        DisplayMode::Desktop,
    )
}

/// SCENARIO: From an empty editor to a published card
#[test]
fn scenario_first_card_complete_journey() {
    let catalog = StaticPlaceholderCatalog::builtin();
    let registry = TemplateRegistry::builtin();
    let mut session = new_session();

    // Step 1: placeholders fill the preview
    let card = session.view_model(&catalog, &false);
    assert_eq!(card.full_name, "Alex Morgan");
    assert!(!card.services.is_empty());
    let rendered = session.render(&registry, &catalog, &false).unwrap();
    assert!(rendered.sections().contains(&SectionKey::Services));

    // Step 2: second cover upload supersedes the first
    assert!(session.on_cover_upload(jpeg("cover-a.jpg")));
    assert!(session.on_cover_upload(jpeg("cover-b.jpg")));
    assert_eq!(session.assets().factory().created.len(), 2);
    assert_eq!(
        session.assets().factory().revoked,
        vec!["blob:test/0/cover-a.jpg".to_string()]
    );
    assert_eq!(
        session.view_model(&catalog, &false).cover_photo.as_deref(),
        Some("blob:test/1/cover-b.jpg")
    );

    // Step 3: eleven images, only the first ten are kept in pick order
    let files = (1..=11).map(|i| jpeg(&format!("work-{i:02}.jpg"))).collect();
    assert_eq!(session.on_add_work_images(files), 10);
    let names: Vec<_> = session
        .state()
        .work_images
        .iter()
        .map(|w| w.file_name.clone().unwrap_or_default())
        .collect();
    let expected: Vec<_> = (1..=10).map(|i| format!("work-{i:02}.jpg")).collect();
    assert_eq!(names, expected);
    assert_eq!(session.assets().factory().created.len(), 12);

    // Step 4: template-3 is locked for a free account
    let mut prompts = Vec::new();
    let outcome = session.select_template(TemplateId::Template3, &false, &mut |t| prompts.push(t));
    assert_eq!(outcome, SelectionOutcome::UpgradeRequired(TemplateId::Template3));
    assert_eq!(session.state().template_id, TemplateId::Template1);
    assert_eq!(prompts, vec![TemplateId::Template3]);

    // Step 5: publish
    session.update_state(ProfilePatch {
        full_name: Some("Ana Lima".into()),
        ..ProfilePatch::default()
    });
    let uploads = CdnUploads::default();
    let persistence = MemoryStore::default();
    session.on_submit(&persistence, &uploads).unwrap();

    let saved = persistence.saved.borrow();
    let published = &saved[0];
    assert_eq!(
        published.cover_photo_url.as_ref().map(MediaUrl::as_str),
        Some("https://cdn.example/cover-b.jpg")
    );
    assert_eq!(published.work_images.len(), 10);
    assert!(published.work_images.iter().all(|w| !w.url.is_transient()));
    assert_eq!(uploads.uploaded.borrow().len(), 11);

    // Every preview URL created was revoked exactly once
    let factory = session.assets().factory();
    let mut revoked = factory.revoked.clone();
    revoked.sort();
    revoked.dedup();
    assert_eq!(revoked.len(), factory.revoked.len());
    assert_eq!(factory.revoked.len(), factory.created.len());

    // After publishing, placeholders are gone for good
    session.update_state(ProfilePatch::bio(""));
    let card = session.view_model(&catalog, &false);
    assert_eq!(card.bio, "");
}

/// SCENARIO: Non-image files are dropped without an error
#[test]
fn scenario_mixed_file_batch() {
    let mut session = new_session();
    let added = session.on_add_work_images(vec![jpeg("a.jpg"), pdf("cv.pdf"), jpeg("b.jpg")]);
    assert_eq!(added, 2);
    assert_eq!(session.assets().live_count(), 2);
    assert!(!session.on_avatar_upload(pdf("me.pdf")));
}

/// SCENARIO: A failed publish leaves everything as it was
#[test]
fn scenario_publish_failure_is_surfaced() {
    let mut session = new_session();
    session.on_avatar_upload(jpeg("me.jpg"));
    session.update_state(ProfilePatch::bio("Hello"));
    let before = session.state().clone();

    let err = session
        .on_submit(
            &MemoryStore {
                fail: true,
                ..MemoryStore::default()
            },
            &CdnUploads::default(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("503"));
    assert_eq!(session.state(), &before);
    assert!(!session.store().has_saved_data());
    assert_eq!(session.assets().live_count(), 1);

    let err = session
        .on_submit(
            &MemoryStore::default(),
            &CdnUploads {
                fail: true,
                ..CdnUploads::default()
            },
        )
        .unwrap_err();
    assert!(err.to_string().contains("me.jpg"));
    assert_eq!(session.state(), &before);
}
