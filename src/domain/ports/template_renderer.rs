//! TemplateRenderer port - the contract every card template implements
//!
//! A renderer receives the composed view model (whose `section_order` is
//! already resolved) and emits HTML. Section visibility, emptiness
//! suppression, and collection caps are applied by the provided
//! [`TemplateRenderer::render`] so variants only differ in layout.

use crate::domain::entities::ViewModel;
use crate::domain::ports::contact_actions::{ContactActions, HeroAction};
use crate::domain::value_objects::{SectionKey, TemplateId};

/// Per-template caps on rendered collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionLimits {
    pub works: usize,
    pub services: usize,
    pub reviews: usize,
}

impl CollectionLimits {
    pub const fn new(works: usize, services: usize, reviews: usize) -> Self {
        Self {
            works,
            services,
            reviews,
        }
    }

    /// Copy of the card with every collection truncated to these caps
    pub fn apply(&self, card: &ViewModel) -> ViewModel {
        let mut capped = card.clone();
        capped.work_images.truncate(self.works);
        capped.services.truncate(self.services);
        capped.reviews.truncate(self.reviews);
        capped
    }
}

/// Output of a template render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    template: TemplateId,
    html: String,
    sections: Vec<SectionKey>,
    actions: Vec<HeroAction>,
}

impl RenderedCard {
    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Sections actually emitted, in render order
    pub fn sections(&self) -> &[SectionKey] {
        &self.sections
    }

    /// Hero actions present in the markup
    pub fn actions(&self) -> &[HeroAction] {
        &self.actions
    }

    /// Dispatch a hero action to the host callbacks.
    ///
    /// Returns false when the action is not part of this render (for example
    /// the main section is hidden).
    pub fn trigger(
        &self,
        action: HeroAction,
        card: &ViewModel,
        handler: &mut dyn ContactActions,
    ) -> bool {
        if !self.actions.contains(&action) {
            return false;
        }
        match action {
            HeroAction::SaveContact => handler.save_contact(card),
            HeroAction::ExchangeContact => handler.open_exchange_contact(card),
        }
        true
    }
}

/// A card template
pub trait TemplateRenderer {
    /// Template this renderer is registered under
    fn id(&self) -> TemplateId;

    /// Human-readable template name
    fn name(&self) -> &'static str;

    /// Collection caps for this layout
    fn limits(&self) -> CollectionLimits;

    /// Render a single section. Collections are already capped.
    ///
    /// The main section must include the hero action buttons.
    fn render_section(&self, key: SectionKey, card: &ViewModel) -> String;

    /// Wrap rendered sections in the template's page shell
    fn render_page(&self, card: &ViewModel, body: &str) -> String;

    /// Whether `key` is emitted for this card. Main always is when visible;
    /// other sections need content.
    fn should_render(&self, key: SectionKey, card: &ViewModel) -> bool {
        card.visibility.is_visible(key) && card.has_content(key)
    }

    /// Render the whole card in its resolved section order
    fn render(&self, card: &ViewModel) -> RenderedCard {
        let capped = self.limits().apply(card);
        let mut sections = Vec::new();
        let mut body = String::new();

        for key in &capped.section_order {
            if !self.should_render(*key, &capped) {
                tracing::debug!(template = %self.id(), section = %key, "section suppressed");
                continue;
            }
            body.push_str(&self.render_section(*key, &capped));
            sections.push(*key);
        }

        let actions = if sections.contains(&SectionKey::Main) {
            HeroAction::ALL.to_vec()
        } else {
            Vec::new()
        };

        RenderedCard {
            template: self.id(),
            html: self.render_page(&capped, &body),
            sections,
            actions,
        }
    }
}
