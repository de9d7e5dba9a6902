//! Domain Services
//!
//! Stateless logic over domain types: view model composition, section
//! reordering, template gating, and the preview panel state machine.

pub mod composer;
pub mod preview;
pub mod section_order;
pub mod template_gate;

pub use composer::{compose, effective_template, ComposeFlags};
pub use preview::{
    live_page_url, CarouselCursor, DisplayMode, HeightConstraint, PanelState, PreviewShell,
};
pub use section_order::{move_down, move_up};
pub use template_gate::{access, select_template, SelectionOutcome, TemplateAccess};
