//! Property tests for section reordering.

use proptest::prelude::*;

use profilecard::domain::services::{move_down, move_up};
use profilecard::domain::value_objects::{SectionKey, SectionOrder};

fn section_key() -> impl Strategy<Value = SectionKey> {
    proptest::sample::select(SectionKey::ALL.to_vec())
}

/// Valid permutations of all sections
fn permutation() -> impl Strategy<Value = SectionOrder> {
    Just(SectionKey::ALL.to_vec())
        .prop_shuffle()
        .prop_map(SectionOrder::new)
}

/// Anything a stored profile might contain, valid or not
fn any_order() -> impl Strategy<Value = SectionOrder> {
    prop_oneof![
        permutation(),
        proptest::collection::vec(section_key(), 0..9).prop_map(SectionOrder::new),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `move_up(0)` and `move_down(len - 1)` never change a valid order.
    #[test]
    fn property_boundary_moves_are_identity(order in permutation()) {
        let mut up = order.clone();
        prop_assert!(!move_up(&mut up, 0));
        prop_assert_eq!(&up, &order);

        let mut down = order.clone();
        prop_assert!(!move_down(&mut down, order.len() - 1));
        prop_assert_eq!(&down, &order);
    }

    /// PROPERTY: Any sequence of moves keeps the order a valid permutation.
    #[test]
    fn property_moves_preserve_permutation(
        order in any_order(),
        moves in proptest::collection::vec((any::<bool>(), 0usize..8), 0..20),
    ) {
        let mut order = order;
        for (up, index) in moves {
            if up {
                move_up(&mut order, index);
            } else {
                move_down(&mut order, index);
            }
            prop_assert!(order.is_valid(), "invalid after move: {:?}", order.raw());
        }
    }

    /// PROPERTY: move_down then move_up at the next slot restores the order.
    #[test]
    fn property_down_then_up_round_trips(order in permutation(), index in 0usize..5) {
        let mut moved = order.clone();
        prop_assert!(move_down(&mut moved, index));
        prop_assert!(move_up(&mut moved, index + 1));
        prop_assert_eq!(moved, order);
    }

    /// PROPERTY: The resolved order is always a full permutation.
    #[test]
    fn property_resolved_is_permutation(order in any_order()) {
        let resolved = order.resolved();
        prop_assert_eq!(resolved.len(), SectionKey::ALL.len());
        prop_assert!(SectionKey::ALL.iter().all(|k| resolved.contains(k)));
    }
}
