//! Gallery template (template-3)
//!
//! Work images lead; the grid allows the most images of any template.

use crate::domain::entities::ViewModel;
use crate::domain::ports::{CollectionLimits, TemplateRenderer};
use crate::domain::value_objects::{SectionKey, TemplateId};

use super::html;

pub struct GalleryTemplate;

impl GalleryTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GalleryTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for GalleryTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Template3
    }

    fn name(&self) -> &'static str {
        "Gallery"
    }

    fn limits(&self) -> CollectionLimits {
        CollectionLimits::new(14, 10, 10)
    }

    fn render_section(&self, key: SectionKey, card: &ViewModel) -> String {
        let inner = match key {
            SectionKey::Main => {
                let mut out = String::from("<div class=\"gallery-hero\">");
                if let Some(avatar) = &card.avatar {
                    out.push_str(&html::image("avatar square", avatar, card.display_name()));
                }
                out.push_str("<div class=\"identity\">");
                out.push_str(&html::text_block("h1", "name", card.display_name()));
                out.push_str(&html::text_block("p", "job-title", &card.job_title));
                out.push_str(&html::text_block("p", "sub-heading", &card.sub_heading));
                out.push_str("</div>");
                out.push_str(&html::hero_actions(card));
                out.push_str("</div>");
                if let Some(cover) = &card.cover_photo {
                    out.push_str(&html::image("cover thin", cover, "Cover photo"));
                }
                out
            }
            SectionKey::About => html::text_block("p", "bio", &card.bio),
            SectionKey::Work => {
                let tiles: String = card
                    .work_images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        format!(
                            "<a class=\"tile\" href=\"{0}\" data-index=\"{1}\">{2}</a>",
                            html::escape(src),
                            i,
                            html::image("thumb", src, &format!("Work sample {}", i + 1))
                        )
                    })
                    .collect();
                format!("<div class=\"grid\">{}</div>", tiles)
            }
            SectionKey::Services => {
                let rows: String = card
                    .services
                    .iter()
                    .map(|s| {
                        format!(
                            "<tr><td>{}</td><td class=\"price\">{}</td></tr>",
                            html::escape(&s.name),
                            html::escape(&s.price)
                        )
                    })
                    .collect();
                format!("{}<table class=\"services\">{}</table>", html::heading(key, 2), rows)
            }
            SectionKey::Reviews => {
                let items: String = card
                    .reviews
                    .iter()
                    .map(|r| {
                        format!(
                            "<li>{} <strong>{}</strong> {}</li>",
                            html::stars(r),
                            html::escape(&r.name),
                            html::escape(&r.text)
                        )
                    })
                    .collect();
                format!("{}<ul class=\"reviews\">{}</ul>", html::heading(key, 2), items)
            }
            SectionKey::Contact => format!(
                "{}{}",
                html::social_links(card),
                html::contact_channels(card)
            ),
        };
        html::section(key, "gallery-section", &inner)
    }

    fn render_page(&self, card: &ViewModel, body: &str) -> String {
        html::page(card, "gallery", body)
    }
}
