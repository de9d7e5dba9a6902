//! Scenario: Mobile Preview
//!
//! Journey: A user edits on a phone, opens and closes the preview panel,
//! and leaves the editor mid-animation.
//!
//! Success Criteria:
//! - The panel height follows content while opening, then is released
//! - Leaving the editor cancels pending frames and revokes every URL

use profilecard::domain::services::{DisplayMode, HeightConstraint, PanelState};
use profilecard::{EditorSession, ProfileStore};

use crate::common::*;

fn mobile_session() -> EditorSession<RecordingUrls, ManualFrames> {
    EditorSession::new(
        ProfileStore::new(),
        RecordingUrls::default(),
        ManualFrames::default(),
        DisplayMode::for_viewport(390, 768),
    )
    .with_live_page("https://cards.example", "ana")
}

/// SCENARIO: Open the panel, let content grow, close it again
#[test]
fn scenario_panel_open_close() {
    let mut session = mobile_session();
    assert_eq!(session.preview().state(), PanelState::Closed);
    assert_eq!(
        session.preview().live_page_url(),
        Some("https://cards.example/ana")
    );

    session.toggle_preview(300.0);
    assert!(session.on_content_resized(420.0));
    assert_eq!(
        session.preview().height_constraint(),
        HeightConstraint::Animating { from: 0.0, to: 420.0 }
    );

    let frame = session.preview().pending_frame().unwrap();
    session.on_frame(frame);
    session.on_transition_end();
    assert_eq!(session.preview().state(), PanelState::Open);
    assert!(!session.on_content_resized(900.0));
    assert_eq!(
        session.preview().height_constraint(),
        HeightConstraint::Unconstrained
    );

    session.toggle_preview(900.0);
    session.on_transition_end();
    assert_eq!(session.preview().state(), PanelState::Closed);

    // Rotating to a wide viewport shows the full preview
    session.set_viewport(1024, 768);
    assert!(session.preview().is_open());
}

/// SCENARIO: Leaving after three uploads while the panel animates
#[test]
fn scenario_teardown_mid_animation() {
    let mut session = mobile_session();
    session.on_cover_upload(jpeg("c.jpg"));
    session.on_avatar_upload(jpeg("a.jpg"));
    session.on_add_work_images(vec![jpeg("w.jpg")]);
    session.toggle_preview(300.0);
    let pending = session.preview().pending_frame().unwrap();

    session.teardown();

    assert_eq!(session.assets().factory().revoked.len(), 3);
    assert_eq!(session.frames().cancelled, vec![pending]);

    // Idempotent
    session.teardown();
    assert_eq!(session.assets().factory().revoked.len(), 3);
    assert_eq!(session.frames().cancelled.len(), 1);
}

/// SCENARIO: Carousel auto-scroll stops with the session
#[test]
fn scenario_carousel_follows_removals() {
    let mut session = mobile_session();
    session.on_add_work_images(vec![jpeg("1.jpg"), jpeg("2.jpg"), jpeg("3.jpg")]);
    session.start_carousel();
    assert!(session.carousel().is_auto_scrolling());

    let tick = *session.frames().requested.last().unwrap();
    session.on_frame(tick);
    session.on_frame(*session.frames().requested.last().unwrap());
    assert_eq!(session.carousel().index(), 2);

    session.on_remove_work_image(2);
    assert_eq!(session.carousel().index(), 1);

    let pending = *session.frames().requested.last().unwrap();
    session.teardown();
    assert!(session.frames().cancelled.contains(&pending));
    assert!(!session.carousel().is_auto_scrolling());
}
