//! Classic template (template-1)
//!
//! Single column: cover banner, round avatar, stacked sections. The only
//! template available on the free tier.

use crate::domain::entities::ViewModel;
use crate::domain::ports::{CollectionLimits, TemplateRenderer};
use crate::domain::value_objects::{SectionKey, TemplateId};

use super::html;

pub struct ClassicTemplate;

impl ClassicTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassicTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for ClassicTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Template1
    }

    fn name(&self) -> &'static str {
        "Classic"
    }

    fn limits(&self) -> CollectionLimits {
        CollectionLimits::new(10, 10, 10)
    }

    fn render_section(&self, key: SectionKey, card: &ViewModel) -> String {
        let inner = match key {
            SectionKey::Main => {
                let mut out = String::new();
                if let Some(cover) = &card.cover_photo {
                    out.push_str(&html::image("cover", cover, "Cover photo"));
                }
                if let Some(avatar) = &card.avatar {
                    out.push_str(&html::image("avatar round", avatar, card.display_name()));
                }
                out.push_str(&html::text_block("h1", "main-heading", &card.main_heading));
                out.push_str(&html::text_block("p", "sub-heading", &card.sub_heading));
                out.push_str(&html::text_block("h2", "name", &card.full_name));
                out.push_str(&html::text_block("p", "job-title", &card.job_title));
                out.push_str(&html::hero_actions(card));
                out
            }
            SectionKey::About => format!(
                "{}{}",
                html::heading(key, 3),
                html::text_block("p", "bio", &card.bio)
            ),
            SectionKey::Work => {
                let images: String = card
                    .work_images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| html::image("work", src, &format!("Work sample {}", i + 1)))
                    .collect();
                format!("{}<div class=\"work-list\">{}</div>", html::heading(key, 3), images)
            }
            SectionKey::Services => {
                let rows: String = card
                    .services
                    .iter()
                    .map(|s| {
                        format!(
                            "<li><span class=\"service\">{}</span><span class=\"price\">{}</span></li>",
                            html::escape(&s.name),
                            html::escape(&s.price)
                        )
                    })
                    .collect();
                format!("{}<ul class=\"services\">{}</ul>", html::heading(key, 3), rows)
            }
            SectionKey::Reviews => {
                let items: String = card
                    .reviews
                    .iter()
                    .map(|r| {
                        format!(
                            "<blockquote>{}<p>{}</p><cite>{}</cite></blockquote>",
                            html::stars(r),
                            html::escape(&r.text),
                            html::escape(&r.name)
                        )
                    })
                    .collect();
                format!("{}{}", html::heading(key, 3), items)
            }
            SectionKey::Contact => format!(
                "{}{}{}",
                html::heading(key, 3),
                html::contact_channels(card),
                html::social_links(card)
            ),
        };
        html::section(key, "classic-section", &inner)
    }

    fn render_page(&self, card: &ViewModel, body: &str) -> String {
        html::page(card, "classic", body)
    }
}
