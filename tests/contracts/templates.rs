//! Template contracts
//!
//! Every built-in template must:
//! - escape user text
//! - carry both hero actions in the main section
//! - keep the resolved section order and honor visibility
//! - cap rendered collections at its own limits

use profilecard::domain::entities::{Review, ServiceItem, WorkImage};
use profilecard::domain::ports::{ContactActions, HeroAction, TemplateRenderer};
use profilecard::domain::value_objects::{SectionKey, TemplateId};
use profilecard::{
    compose, ComposeFlags, MediaUrl, ProfileState, StaticPlaceholderCatalog, TemplateRegistry,
    ViewModel,
};

use crate::common::*;

fn card_for(state: &ProfileState) -> ViewModel {
    compose(
        state,
        &state.visibility,
        ComposeFlags {
            has_saved_data: true,
            subscribed: true,
        },
        &StaticPlaceholderCatalog::builtin(),
    )
}

fn full_card(template: TemplateId) -> ViewModel {
    let mut state = ProfileState::from_json(FULL_PROFILE).unwrap();
    state.template_id = template;
    card_for(&state)
}

#[derive(Default)]
struct RecordingActions {
    saved: Vec<String>,
    exchanged: Vec<String>,
}

impl ContactActions for RecordingActions {
    fn save_contact(&mut self, card: &ViewModel) {
        self.saved.push(card.full_name.clone());
    }

    fn open_exchange_contact(&mut self, card: &ViewModel) {
        self.exchanged.push(card.full_name.clone());
    }
}

/// CONTRACT: Every template id has a distinct registered renderer
#[test]
fn contract_every_template_is_registered() {
    let registry = TemplateRegistry::builtin();
    assert_eq!(registry.ids(), TemplateId::ALL.to_vec());
    for id in TemplateId::ALL {
        assert_eq!(registry.get(id).unwrap().id(), id);
    }
}

/// CONTRACT: User text never reaches the markup unescaped
#[test]
fn contract_user_text_is_escaped() {
    let registry = TemplateRegistry::builtin();
    let mut state = ProfileState::from_json(FULL_PROFILE).unwrap();
    state.full_name = "<script>alert(1)</script>".to_string();
    state.bio = "Tom & \"Jerry\"".to_string();

    for id in TemplateId::ALL {
        state.template_id = id;
        let html = registry.render(&card_for(&state)).unwrap().into_html();
        assert!(!html.contains("<script>"), "{id} leaked raw markup");
        assert!(html.contains("&lt;script&gt;"), "{id} dropped the name");
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"), "{id} bio not escaped");
    }
}

/// CONTRACT: The main section carries both hero actions, which dispatch to the host
#[test]
fn contract_hero_actions_dispatch_to_host() {
    let registry = TemplateRegistry::builtin();
    for id in TemplateId::ALL {
        let card = full_card(id);
        let rendered = registry.render(&card).unwrap();
        for action in HeroAction::ALL {
            let marker = format!("data-action=\"{}\"", action.as_str());
            assert!(rendered.html().contains(&marker), "{id} missing {marker}");
        }

        let mut host = RecordingActions::default();
        assert!(rendered.trigger(HeroAction::SaveContact, &card, &mut host));
        assert!(rendered.trigger(HeroAction::ExchangeContact, &card, &mut host));
        assert_eq!(host.saved, vec!["Ana Lima".to_string()]);
        assert_eq!(host.exchanged, vec!["Ana Lima".to_string()]);
    }
}

/// CONTRACT: Hiding the main section removes the hero actions
#[test]
fn contract_hidden_main_has_no_actions() {
    let registry = TemplateRegistry::builtin();
    let mut state = ProfileState::from_json(FULL_PROFILE).unwrap();
    state.visibility.set(SectionKey::Main, false);

    for id in TemplateId::ALL {
        state.template_id = id;
        let card = card_for(&state);
        let rendered = registry.render(&card).unwrap();
        assert!(!rendered.sections().contains(&SectionKey::Main));
        assert!(rendered.actions().is_empty());
        assert!(!rendered.html().contains("data-action="));

        let mut host = RecordingActions::default();
        assert!(!rendered.trigger(HeroAction::SaveContact, &card, &mut host));
        assert!(host.saved.is_empty());
    }
}

/// CONTRACT: Sections render in the resolved order
#[test]
fn contract_sections_follow_resolved_order() {
    let registry = TemplateRegistry::builtin();
    let mut state = ProfileState::from_json(FULL_PROFILE).unwrap();
    state.section_order = serde_json::from_str(
        r#"["contact", "reviews", "services", "work", "about", "main"]"#,
    )
    .unwrap();

    for id in TemplateId::ALL {
        state.template_id = id;
        let rendered = registry.render(&card_for(&state)).unwrap();
        assert_eq!(rendered.sections(), state.section_order.raw(), "{id}");

        let html = rendered.html();
        let contact = html.find("data-section=\"contact\"").unwrap();
        let main = html.find("data-section=\"main\"").unwrap();
        assert!(contact < main, "{id} ignored the order");
    }
}

/// CONTRACT: Empty optional sections are suppressed, the main section never is
#[test]
fn contract_empty_sections_are_suppressed() {
    let registry = TemplateRegistry::builtin();
    let mut state = ProfileState::default();

    for id in TemplateId::ALL {
        state.template_id = id;
        let rendered = registry.render(&card_for(&state)).unwrap();
        assert_eq!(rendered.sections(), &[SectionKey::Main], "{id}");
        assert!(!rendered.html().contains("data-section=\"about\""), "{id}");
    }
}

/// CONTRACT: Collections are capped at the template's limits
#[test]
fn contract_collections_are_capped() {
    let registry = TemplateRegistry::builtin();
    let mut state = ProfileState::from_json(FULL_PROFILE).unwrap();
    let services: Vec<ServiceItem> = (0..20)
        .map(|i| ServiceItem {
            name: format!("Offer {i}"),
            price: format!("${i}"),
        })
        .collect();
    let reviews: Vec<Review> = (0..20)
        .map(|i| Review {
            name: format!("Reviewer {i}"),
            text: "Lovely".to_string(),
            rating: Some(4),
        })
        .collect();
    let works: Vec<WorkImage> = (0..10)
        .map(|i| WorkImage::new(MediaUrl::remote(format!("https://cdn.example/p{i}.jpg")), None))
        .collect();

    for id in TemplateId::ALL {
        state.template_id = id;
        state.services = services.clone();
        state.reviews = reviews.clone();
        state.work_images = works.clone();
        let renderer = registry.get(id).unwrap();
        let limits = renderer.limits();
        let html = renderer.render(&card_for(&state)).into_html();

        assert_eq!(html.matches("Offer ").count(), limits.services.min(20), "{id}");
        assert_eq!(html.matches("Reviewer ").count(), limits.reviews.min(20), "{id}");
        assert_eq!(html.matches("src=\"https://cdn.example/p").count(), limits.works.min(10), "{id}");
    }
}
