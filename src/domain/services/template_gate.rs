//! Template selection gate
//!
//! ```text
//! Unlocked --select--> Selected        (template_id changes)
//! Locked   --select--> Locked          (upgrade prompt, template_id unchanged)
//! ```

use crate::domain::ports::EntitlementSource;
use crate::domain::value_objects::TemplateId;

/// Whether an account may pick a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateAccess {
    Unlocked,
    Locked,
}

/// Result of a selection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection moved to the requested template
    Selected(TemplateId),
    /// The requested template was already selected
    Unchanged(TemplateId),
    /// The template is locked; the upgrade prompt was raised
    UpgradeRequired(TemplateId),
}

impl SelectionOutcome {
    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionOutcome::Selected(_) | SelectionOutcome::Unchanged(_))
    }
}

pub fn access(template: TemplateId, entitlement: &dyn EntitlementSource) -> TemplateAccess {
    if template.is_free() || entitlement.is_subscribed() {
        TemplateAccess::Unlocked
    } else {
        TemplateAccess::Locked
    }
}

/// Attempt to switch `current` to `requested`.
///
/// A locked template leaves `current` untouched and calls `on_upgrade`
/// exactly once with the requested template.
pub fn select_template(
    current: &mut TemplateId,
    requested: TemplateId,
    entitlement: &dyn EntitlementSource,
    on_upgrade: &mut dyn FnMut(TemplateId),
) -> SelectionOutcome {
    match access(requested, entitlement) {
        TemplateAccess::Locked => {
            tracing::debug!(requested = %requested, current = %current, "template locked");
            on_upgrade(requested);
            SelectionOutcome::UpgradeRequired(requested)
        }
        TemplateAccess::Unlocked if *current == requested => SelectionOutcome::Unchanged(requested),
        TemplateAccess::Unlocked => {
            *current = requested;
            SelectionOutcome::Selected(requested)
        }
    }
}
