//! Editorial template (template-5)
//!
//! Magazine-style layout. The about block uses the job title as a
//! standfirst when there is no bio, and is dropped when both are empty.

use crate::domain::entities::ViewModel;
use crate::domain::ports::{CollectionLimits, TemplateRenderer};
use crate::domain::value_objects::{SectionKey, TemplateId};

use super::html;

pub struct EditorialTemplate;

impl EditorialTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EditorialTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for EditorialTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Template5
    }

    fn name(&self) -> &'static str {
        "Editorial"
    }

    fn limits(&self) -> CollectionLimits {
        CollectionLimits::new(12, 12, 14)
    }

    fn should_render(&self, key: SectionKey, card: &ViewModel) -> bool {
        if !card.visibility.is_visible(key) {
            return false;
        }
        match key {
            SectionKey::Main => true,
            SectionKey::About => {
                !card.bio.trim().is_empty() || !card.job_title.trim().is_empty()
            }
            _ => card.has_content(key),
        }
    }

    fn render_section(&self, key: SectionKey, card: &ViewModel) -> String {
        let inner = match key {
            SectionKey::Main => {
                let cover = card
                    .cover_photo
                    .as_deref()
                    .map(|src| html::image("masthead", src, "Cover photo"))
                    .unwrap_or_default();
                format!(
                    "{}<div class=\"byline\">{}{}{}</div>{}{}",
                    cover,
                    html::text_block("h1", "main-heading", &card.main_heading),
                    html::text_block("p", "sub-heading", &card.sub_heading),
                    html::text_block("p", "author", card.display_name()),
                    card.avatar
                        .as_deref()
                        .map(|src| html::image("portrait", src, card.display_name()))
                        .unwrap_or_default(),
                    html::hero_actions(card)
                )
            }
            SectionKey::About => {
                let standfirst = if card.bio.trim().is_empty() {
                    &card.job_title
                } else {
                    &card.bio
                };
                format!(
                    "{}{}",
                    html::heading(key, 2),
                    html::text_block("p", "standfirst", standfirst)
                )
            }
            SectionKey::Work => {
                let figures: String = card
                    .work_images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        format!(
                            "<figure>{}<figcaption>Plate {}</figcaption></figure>",
                            html::image("plate", src, "Work"),
                            i + 1
                        )
                    })
                    .collect();
                format!("{}{}", html::heading(key, 2), figures)
            }
            SectionKey::Services => {
                let items: String = card
                    .services
                    .iter()
                    .map(|s| {
                        format!(
                            "<li>{} <em>{}</em></li>",
                            html::escape(&s.name),
                            html::escape(&s.price)
                        )
                    })
                    .collect();
                format!("{}<ol class=\"services\">{}</ol>", html::heading(key, 2), items)
            }
            SectionKey::Reviews => {
                let items: String = card
                    .reviews
                    .iter()
                    .map(|r| {
                        format!(
                            "<blockquote class=\"pull\"><p>&ldquo;{}&rdquo;</p>{}<footer>{}</footer></blockquote>",
                            html::escape(&r.text),
                            html::stars(r),
                            html::escape(&r.name)
                        )
                    })
                    .collect();
                format!("{}{}", html::heading(key, 2), items)
            }
            SectionKey::Contact => format!(
                "{}<address>{}</address>{}",
                html::heading(key, 2),
                html::contact_channels(card),
                html::social_links(card)
            ),
        };
        html::section(key, "editorial-section", &inner)
    }

    fn render_page(&self, card: &ViewModel, body: &str) -> String {
        html::page(card, "editorial", body)
    }
}
