//! vCard 3.0 export
//!
//! Default implementation behind the "save contact" hero action.

use crate::domain::entities::ViewModel;
use crate::domain::ports::ContactActions;

const MAX_LINE_OCTETS: usize = 75;

/// Escape a vCard text value (RFC 6350 section 3.4)
fn escape_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Build a vCard for the card's contact details. Lines end with CRLF.
pub fn to_vcard(card: &ViewModel) -> String {
    let mut lines = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];

    let name = card.display_name().trim();
    lines.push(format!("FN:{}", escape_value(name)));

    let mut parts = name.rsplitn(2, ' ');
    let family = parts.next().unwrap_or_default();
    let given = parts.next().unwrap_or_default();
    lines.push(format!("N:{};{};;;", escape_value(family), escape_value(given)));

    if !card.job_title.trim().is_empty() {
        lines.push(format!("TITLE:{}", escape_value(card.job_title.trim())));
    }
    if !card.email.trim().is_empty() {
        lines.push(format!("EMAIL;TYPE=INTERNET:{}", escape_value(card.email.trim())));
    }
    if !card.phone.trim().is_empty() {
        lines.push(format!("TEL;TYPE=CELL:{}", escape_value(card.phone.trim())));
    }
    if let Some(photo) = card.contact_photo.as_deref() {
        lines.push(format!("PHOTO;VALUE=URI:{}", photo));
    }
    for link in &card.social_links {
        lines.push(format!("URL;TYPE={}:{}", link.platform, link.url));
    }
    if !card.bio.trim().is_empty() {
        lines.push(format!("NOTE:{}", escape_value(card.bio.trim())));
    }

    lines.push("END:VCARD".to_string());
    lines.iter().map(|line| fold_line(line)).collect()
}

/// Fold a content line at 75 octets (RFC 6350 section 3.2).
///
/// Continuation lines start with a single space, which counts toward their
/// 75 octets. Splits never fall inside a UTF-8 sequence.
fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut width = 0;
    for c in line.chars() {
        if width + c.len_utf8() > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(c);
        width += c.len_utf8();
    }
    out.push_str("\r\n");
    out
}

/// File name offered for the download
pub fn vcard_file_name(card: &ViewModel) -> String {
    let slug: String = card
        .display_name()
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "contact.vcf".to_string()
    } else {
        format!("{slug}.vcf")
    }
}

/// A vCard produced by the "save contact" action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardDownload {
    pub file_name: String,
    pub content: String,
}

/// Hero action handler that turns "save contact" into vCard downloads
#[derive(Debug, Default)]
pub struct VCardActions {
    downloads: Vec<VCardDownload>,
    exchange_requests: usize,
}

impl VCardActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downloads(&self) -> &[VCardDownload] {
        &self.downloads
    }

    pub fn take_downloads(&mut self) -> Vec<VCardDownload> {
        std::mem::take(&mut self.downloads)
    }

    /// Number of times the exchange flow was requested
    pub fn exchange_requests(&self) -> usize {
        self.exchange_requests
    }
}

impl ContactActions for VCardActions {
    fn save_contact(&mut self, card: &ViewModel) {
        let download = VCardDownload {
            file_name: vcard_file_name(card),
            content: to_vcard(card),
        };
        tracing::debug!(file = %download.file_name, "prepared vcard download");
        self.downloads.push(download);
    }

    fn open_exchange_contact(&mut self, card: &ViewModel) {
        tracing::debug!(name = card.display_name(), "contact exchange requested");
        self.exchange_requests += 1;
    }
}
