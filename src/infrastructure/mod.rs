//! Infrastructure Layer
//!
//! Concrete implementations of domain ports: object URL management, card
//! templates, placeholder catalogs, and vCard export.

pub mod assets;
pub mod placeholders;
pub mod templates;
pub mod vcard;

pub use assets::{AssetLifecycleManager, BlobUrlFactory, RegisteredAsset};
pub use placeholders::{builtin_placeholders, StaticPlaceholderCatalog};
pub use templates::{all_templates, TemplateRegistry};
pub use vcard::{to_vcard, vcard_file_name, VCardActions, VCardDownload};
