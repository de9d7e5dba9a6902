//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and host code provide concrete implementations.

pub mod collaborators;
pub mod contact_actions;
pub mod frame_scheduler;
pub mod object_url;
pub mod placeholder_catalog;
pub mod template_renderer;

pub use collaborators::{EntitlementSource, ProfilePersistence, UploadService};
pub use contact_actions::{ContactActions, HeroAction};
pub use frame_scheduler::{FrameHandle, FrameScheduler};
pub use object_url::ObjectUrlFactory;
pub use placeholder_catalog::{PlaceholderCatalog, Placeholders};
pub use template_renderer::{CollectionLimits, RenderedCard, TemplateRenderer};
