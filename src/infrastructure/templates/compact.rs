//! Compact template (template-4)
//!
//! Dense list layout for service-heavy cards.

use crate::domain::entities::ViewModel;
use crate::domain::ports::{CollectionLimits, TemplateRenderer};
use crate::domain::value_objects::{SectionKey, TemplateId};

use super::html;

pub struct CompactTemplate;

impl CompactTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompactTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for CompactTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Template4
    }

    fn name(&self) -> &'static str {
        "Compact"
    }

    fn limits(&self) -> CollectionLimits {
        CollectionLimits::new(10, 14, 12)
    }

    fn render_section(&self, key: SectionKey, card: &ViewModel) -> String {
        let inner = match key {
            SectionKey::Main => {
                let avatar = card
                    .avatar
                    .as_deref()
                    .map(|src| html::image("avatar small", src, card.display_name()))
                    .unwrap_or_default();
                format!(
                    "<div class=\"row\">{}<div>{}{}</div></div>{}{}",
                    avatar,
                    html::text_block("strong", "name", card.display_name()),
                    html::text_block("span", "job-title", &card.job_title),
                    html::text_block("p", "sub-heading", &card.sub_heading),
                    html::hero_actions(card)
                )
            }
            SectionKey::About => html::text_block("p", "bio", &card.bio),
            SectionKey::Work => {
                let thumbs: String = card
                    .work_images
                    .iter()
                    .map(|src| html::image("thumb", src, "Work"))
                    .collect();
                format!("<div class=\"strip\">{}</div>", thumbs)
            }
            SectionKey::Services => {
                let items: String = card
                    .services
                    .iter()
                    .map(|s| {
                        if s.price.trim().is_empty() {
                            format!("<dt>{}</dt>", html::escape(&s.name))
                        } else {
                            format!(
                                "<dt>{}</dt><dd>{}</dd>",
                                html::escape(&s.name),
                                html::escape(&s.price)
                            )
                        }
                    })
                    .collect();
                format!("{}<dl class=\"services\">{}</dl>", html::heading(key, 4), items)
            }
            SectionKey::Reviews => {
                let items: String = card
                    .reviews
                    .iter()
                    .map(|r| {
                        format!(
                            "<p class=\"review\">{} {} &mdash; {}</p>",
                            html::stars(r),
                            html::escape(&r.text),
                            html::escape(&r.name)
                        )
                    })
                    .collect();
                format!("{}{}", html::heading(key, 4), items)
            }
            SectionKey::Contact => format!(
                "<div class=\"inline\">{}{}</div>",
                html::contact_channels(card),
                html::social_links(card)
            ),
        };
        html::section(key, "compact-section", &inner)
    }

    fn render_page(&self, card: &ViewModel, body: &str) -> String {
        html::page(card, "compact", body)
    }
}
