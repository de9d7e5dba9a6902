//! Spotlight template (template-2)
//!
//! Full-bleed cover with the name overlaid, services as price cards.

use crate::domain::entities::ViewModel;
use crate::domain::ports::{CollectionLimits, TemplateRenderer};
use crate::domain::value_objects::{SectionKey, TemplateId};

use super::html;

pub struct SpotlightTemplate;

impl SpotlightTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpotlightTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SpotlightTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Template2
    }

    fn name(&self) -> &'static str {
        "Spotlight"
    }

    fn limits(&self) -> CollectionLimits {
        CollectionLimits::new(12, 10, 12)
    }

    fn render_section(&self, key: SectionKey, card: &ViewModel) -> String {
        let inner = match key {
            SectionKey::Main => {
                let background = card
                    .cover_photo
                    .as_deref()
                    .map(|src| format!(" style=\"background-image:url('{}')\"", html::escape(src)))
                    .unwrap_or_default();
                let avatar = card
                    .avatar
                    .as_deref()
                    .map(|src| html::image("avatar", src, card.display_name()))
                    .unwrap_or_default();
                format!(
                    "<header class=\"spotlight-hero\"{}>{}{}{}<div class=\"overlay\">{}{}</div>{}</header>",
                    background,
                    avatar,
                    html::text_block("h1", "main-heading", &card.main_heading),
                    html::text_block("p", "sub-heading", &card.sub_heading),
                    html::text_block("h2", "name", &card.full_name),
                    html::text_block("p", "job-title", &card.job_title),
                    html::hero_actions(card)
                )
            }
            SectionKey::About => format!(
                "{}{}",
                html::heading(key, 2),
                html::text_block("p", "bio lead", &card.bio)
            ),
            SectionKey::Work => {
                let slides: String = card
                    .work_images
                    .iter()
                    .map(|src| format!("<figure>{}</figure>", html::image("slide", src, "Work")))
                    .collect();
                format!(
                    "{}<div class=\"carousel\" data-count=\"{}\">{}</div>",
                    html::heading(key, 2),
                    card.work_images.len(),
                    slides
                )
            }
            SectionKey::Services => {
                let cards: String = card
                    .services
                    .iter()
                    .map(|s| {
                        format!(
                            "<div class=\"price-card\"><h3>{}</h3><strong>{}</strong></div>",
                            html::escape(&s.name),
                            html::escape(&s.price)
                        )
                    })
                    .collect();
                format!("{}<div class=\"price-cards\">{}</div>", html::heading(key, 2), cards)
            }
            SectionKey::Reviews => {
                let items: String = card
                    .reviews
                    .iter()
                    .map(|r| {
                        format!(
                            "<figure class=\"review\"><figcaption>{}</figcaption>{}<p>{}</p></figure>",
                            html::escape(&r.name),
                            html::stars(r),
                            html::escape(&r.text)
                        )
                    })
                    .collect();
                format!("{}{}", html::heading(key, 2), items)
            }
            SectionKey::Contact => format!(
                "{}<div class=\"channels\">{}</div>{}",
                html::heading(key, 2),
                html::contact_channels(card),
                html::social_links(card)
            ),
        };
        html::section(key, "spotlight-section", &inner)
    }

    fn render_page(&self, card: &ViewModel, body: &str) -> String {
        html::page(card, "spotlight", body)
    }
}
