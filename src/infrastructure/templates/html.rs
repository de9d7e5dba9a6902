//! Markup helpers shared by the card templates

use crate::domain::entities::{ReviewView, ViewModel};
use crate::domain::ports::HeroAction;
use crate::domain::value_objects::SectionKey;

/// Escape text for use in element content and quoted attributes
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<section>` wrapper carrying the section key
pub fn section(key: SectionKey, class: &str, inner: &str) -> String {
    format!(
        "<section class=\"{class}\" data-section=\"{key}\">{inner}</section>\n",
        class = escape(class),
        key = key.as_str(),
        inner = inner
    )
}

/// Section heading
pub fn heading(key: SectionKey, level: u8) -> String {
    format!("<h{level}>{}</h{level}>", key.title())
}

/// Paragraph, omitted entirely when the text is blank
pub fn text_block(tag: &str, class: &str, text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    format!("<{tag} class=\"{class}\">{}</{tag}>", escape(text))
}

pub fn image(class: &str, src: &str, alt: &str) -> String {
    format!(
        "<img class=\"{class}\" src=\"{}\" alt=\"{}\">",
        escape(src),
        escape(alt)
    )
}

/// The two hero buttons every template carries
pub fn hero_actions(card: &ViewModel) -> String {
    let style = format!(
        "background:{};color:{}",
        escape(&card.presentation.button_bg_color),
        card.presentation.button_text_color
    );
    let buttons: Vec<String> = HeroAction::ALL
        .iter()
        .map(|action| {
            format!(
                "<button type=\"button\" data-action=\"{}\" style=\"{}\">{}</button>",
                action.as_str(),
                style,
                action.label()
            )
        })
        .collect();
    format!("<div class=\"hero-actions\">{}</div>", buttons.join(""))
}

/// Star glyphs for a review: filled then empty, always five in total
pub fn stars(review: &ReviewView) -> String {
    let (filled, empty) = review.stars();
    format!(
        "<span class=\"stars\" aria-label=\"{} out of 5\">{}{}</span>",
        filled,
        "\u{2605}".repeat(filled as usize),
        "\u{2606}".repeat(empty as usize)
    )
}

pub fn social_links(card: &ViewModel) -> String {
    if card.social_links.is_empty() {
        return String::new();
    }
    let items: Vec<String> = card
        .social_links
        .iter()
        .map(|link| {
            format!(
                "<li><a href=\"{}\" data-platform=\"{}\" rel=\"noopener\">{}</a></li>",
                escape(&link.url),
                link.platform,
                link.platform.label()
            )
        })
        .collect();
    format!("<ul class=\"social\">{}</ul>", items.join(""))
}

/// Email and phone links
pub fn contact_channels(card: &ViewModel) -> String {
    let mut out = String::new();
    if !card.email.trim().is_empty() {
        out.push_str(&format!(
            "<a class=\"email\" href=\"mailto:{0}\">{0}</a>",
            escape(card.email.trim())
        ));
    }
    if !card.phone.trim().is_empty() {
        out.push_str(&format!(
            "<a class=\"phone\" href=\"tel:{0}\">{0}</a>",
            escape(card.phone.trim())
        ));
    }
    out
}

/// Outer document for a template
pub fn page(card: &ViewModel, template_class: &str, body: &str) -> String {
    let p = &card.presentation;
    let branding = if card.show_branding {
        "<footer class=\"branding\">Made with profilecard</footer>\n"
    } else {
        ""
    };
    format!(
        "<article class=\"card {class}\" data-template=\"{template}\" data-theme=\"{theme}\" \
         style=\"font-family:{font};text-align:{align}\">\n{body}{branding}</article>\n",
        class = template_class,
        template = card.template,
        theme = p.page_theme,
        font = escape(&p.font),
        align = p.text_alignment,
        body = body,
        branding = branding
    )
}
