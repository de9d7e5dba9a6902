//! Section reordering
//!
//! Moves swap adjacent positions only, so a valid permutation stays valid.
//! A malformed order is replaced by the default before any move.

use crate::domain::value_objects::SectionOrder;

/// Move the section at `index` one slot earlier.
///
/// Returns true if the order changed. Index 0 and out-of-range indices are
/// no-ops.
pub fn move_up(order: &mut SectionOrder, index: usize) -> bool {
    order.normalize();
    if index == 0 || index >= order.len() {
        return false;
    }
    order.swap(index - 1, index);
    true
}

/// Move the section at `index` one slot later.
///
/// Returns true if the order changed. The last index and out-of-range
/// indices are no-ops.
pub fn move_down(order: &mut SectionOrder, index: usize) -> bool {
    order.normalize();
    if index >= order.len().saturating_sub(1) {
        return false;
    }
    order.swap(index, index + 1);
    true
}
