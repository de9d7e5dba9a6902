//! profilecard - digital business card composition and rendering
//!
//! A profile is edited through an [`EditorSession`], composed into a
//! template-agnostic [`ViewModel`], and rendered to HTML by one of the
//! interchangeable card templates in the [`TemplateRegistry`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{EditorSession, MediaSlot, ProfileStore};
pub use config::Config;
pub use domain::entities::{LocalFile, ProfilePatch, ProfileState, ViewModel};
pub use domain::ports::{RenderedCard, TemplateRenderer};
pub use domain::services::{compose, ComposeFlags};
pub use domain::value_objects::{MediaUrl, SectionKey, TemplateId};
pub use error::{CardError, CardResult};
pub use infrastructure::{BlobUrlFactory, StaticPlaceholderCatalog, TemplateRegistry};
