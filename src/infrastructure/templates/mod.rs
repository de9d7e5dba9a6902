//! Card templates
//!
//! These implement the TemplateRenderer port from the domain layer. Dispatch
//! goes through [`TemplateRegistry`], so a new template only needs a
//! `TemplateRenderer` implementation and a `register` call.

pub mod classic;
pub mod compact;
pub mod editorial;
pub mod gallery;
pub mod html;
pub mod spotlight;

pub use classic::ClassicTemplate;
pub use compact::CompactTemplate;
pub use editorial::EditorialTemplate;
pub use gallery::GalleryTemplate;
pub use spotlight::SpotlightTemplate;

use std::collections::BTreeMap;

use crate::domain::entities::ViewModel;
use crate::domain::ports::{RenderedCard, TemplateRenderer};
use crate::domain::value_objects::TemplateId;

/// Get all built-in templates
pub fn all_templates() -> Vec<Box<dyn TemplateRenderer>> {
    vec![
        Box::new(ClassicTemplate::new()),
        Box::new(SpotlightTemplate::new()),
        Box::new(GalleryTemplate::new()),
        Box::new(CompactTemplate::new()),
        Box::new(EditorialTemplate::new()),
    ]
}

/// `template id -> renderer` lookup
pub struct TemplateRegistry {
    renderers: BTreeMap<TemplateId, Box<dyn TemplateRenderer>>,
}

impl TemplateRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            renderers: BTreeMap::new(),
        }
    }

    /// Registry with every built-in template
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for renderer in all_templates() {
            registry.register(renderer);
        }
        registry
    }

    /// Add or replace the renderer for its template id
    pub fn register(&mut self, renderer: Box<dyn TemplateRenderer>) {
        self.renderers.insert(renderer.id(), renderer);
    }

    /// Renderer for `id`, falling back to the default template
    pub fn get(&self, id: TemplateId) -> Option<&dyn TemplateRenderer> {
        self.renderers
            .get(&id)
            .or_else(|| {
                tracing::debug!(template = %id, "no renderer registered, using default");
                self.renderers.get(&TemplateId::default())
            })
            .map(|r| r.as_ref())
    }

    pub fn ids(&self) -> Vec<TemplateId> {
        self.renderers.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn TemplateRenderer> {
        self.renderers.values().map(|r| r.as_ref())
    }

    /// Render a card with the template it names
    pub fn render(&self, card: &ViewModel) -> Option<RenderedCard> {
        self.get(card.template).map(|renderer| renderer.render(card))
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
