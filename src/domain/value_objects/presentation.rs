//! Presentation options - theme, button colors, alignment, social platforms
//!
//! All of these are parsed leniently: an unknown stored value falls back to
//! the default variant instead of failing the profile load.

use serde::{Deserialize, Deserializer, Serialize};

macro_rules! lenient_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn parse(raw: &str) -> Option<Self> {
                match raw.trim().to_ascii_lowercase().as_str() {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = serde_json::Value::deserialize(deserializer)?;
                Ok(raw.as_str().and_then($name::parse).unwrap_or_else(|| {
                    tracing::debug!(value = %raw, kind = stringify!($name), "unknown value, using default");
                    $name::default()
                }))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

lenient_enum! {
    /// Page background theme
    pub enum PageTheme {
        Light => "light",
        Dark => "dark",
    }
    default = Light;
}

lenient_enum! {
    /// Text color used on call-to-action buttons
    pub enum ButtonTextColor {
        White => "white",
        Black => "black",
    }
    default = White;
}

lenient_enum! {
    /// Alignment of body text
    pub enum TextAlignment {
        Left => "left",
        Center => "center",
        Right => "right",
    }
    default = Center;
}

lenient_enum! {
    /// Supported social networks, in display order
    pub enum SocialPlatform {
        Facebook => "facebook",
        Instagram => "instagram",
        Linkedin => "linkedin",
        X => "x",
        Tiktok => "tiktok",
    }
    default = Facebook;
}

impl SocialPlatform {
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::X => "X",
            SocialPlatform::Tiktok => "TikTok",
        }
    }
}
