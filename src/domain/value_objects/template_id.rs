//! TemplateId value object - which visual template renders the card

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a template variant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, clap::ValueEnum,
)]
pub enum TemplateId {
    /// Classic single-column card (free tier)
    #[default]
    #[serde(rename = "template-1")]
    #[value(name = "template-1")]
    Template1,
    /// Spotlight hero with cover overlay
    #[serde(rename = "template-2")]
    #[value(name = "template-2")]
    Template2,
    /// Gallery-first layout
    #[serde(rename = "template-3")]
    #[value(name = "template-3")]
    Template3,
    /// Compact list layout
    #[serde(rename = "template-4")]
    #[value(name = "template-4")]
    Template4,
    /// Editorial two-tone layout
    #[serde(rename = "template-5")]
    #[value(name = "template-5")]
    Template5,
}

impl TemplateId {
    /// Every known template, in catalog order
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Template1,
        TemplateId::Template2,
        TemplateId::Template3,
        TemplateId::Template4,
        TemplateId::Template5,
    ];

    /// Parse a stored identifier; unknown values resolve to `template-1`.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim() {
            "template-1" => TemplateId::Template1,
            "template-2" => TemplateId::Template2,
            "template-3" => TemplateId::Template3,
            "template-4" => TemplateId::Template4,
            "template-5" => TemplateId::Template5,
            other => {
                tracing::debug!(template_id = other, "unknown template id, using template-1");
                TemplateId::default()
            }
        }
    }

    /// Wire identifier (`template-N`)
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Template1 => "template-1",
            TemplateId::Template2 => "template-2",
            TemplateId::Template3 => "template-3",
            TemplateId::Template4 => "template-4",
            TemplateId::Template5 => "template-5",
        }
    }

    /// Whether the template is available without a subscription
    pub fn is_free(&self) -> bool {
        matches!(self, TemplateId::Template1)
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(raw) => Ok(TemplateId::parse_or_default(&raw)),
            other => {
                tracing::debug!(template_id = %other, "malformed template id, using template-1");
                Ok(TemplateId::default())
            }
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
