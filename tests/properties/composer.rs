//! Property tests for view model composition.

use proptest::prelude::*;

use profilecard::domain::entities::{Review, ServiceItem};
use profilecard::domain::value_objects::SectionVisibility;
use profilecard::{compose, ComposeFlags, ProfileState, StaticPlaceholderCatalog};

fn profile() -> impl Strategy<Value = ProfileState> {
    (
        ".{0,16}",
        ".{0,32}",
        proptest::collection::vec(("[a-z]{1,8}", "\\$[0-9]{1,3}"), 0..4),
        proptest::collection::vec(("[A-Z][a-z]{0,6}", ".{0,20}", any::<Option<i64>>()), 0..4),
    )
        .prop_map(|(full_name, bio, services, reviews)| ProfileState {
            full_name,
            bio,
            services: services
                .into_iter()
                .map(|(n, p)| ServiceItem::new(n, p))
                .collect(),
            reviews: reviews
                .into_iter()
                .map(|(n, t, r)| Review::new(n, t, r))
                .collect(),
            ..ProfileState::default()
        })
}

fn flags() -> impl Strategy<Value = ComposeFlags> {
    (any::<bool>(), any::<bool>()).prop_map(|(has_saved_data, subscribed)| ComposeFlags {
        has_saved_data,
        subscribed,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Composing twice from identical inputs yields equal output.
    #[test]
    fn property_compose_is_deterministic(state in profile(), flags in flags()) {
        let catalog = StaticPlaceholderCatalog::builtin();
        let visibility = SectionVisibility::default();
        let first = compose(&state, &visibility, flags, &catalog);
        let second = compose(&state, &visibility, flags, &catalog);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Published profiles never show placeholder text.
    #[test]
    fn property_saved_profiles_skip_placeholders(state in profile()) {
        let catalog = StaticPlaceholderCatalog::builtin();
        let card = compose(
            &state,
            &SectionVisibility::default(),
            ComposeFlags { has_saved_data: true, subscribed: false },
            &catalog,
        );
        if state.bio.trim().is_empty() {
            prop_assert_eq!(card.bio, "");
        }
        prop_assert_eq!(card.services.len(), state.services.len());
        prop_assert_eq!(card.reviews.len(), state.reviews.len());
    }

    /// PROPERTY: Displayed ratings are always within [0, 5].
    #[test]
    fn property_view_ratings_in_range(state in profile(), flags in flags()) {
        let card = compose(
            &state,
            &SectionVisibility::default(),
            flags,
            &StaticPlaceholderCatalog::builtin(),
        );
        prop_assert!(card.reviews.iter().all(|r| r.rating <= 5));
        prop_assert_eq!(card.show_branding, !flags.subscribed);
    }
}
