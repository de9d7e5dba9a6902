//! Domain Entities
//!
//! Core domain objects: the canonical profile, user-picked files, and the
//! render-ready view model derived from them.

mod local_file;
mod profile;
mod view_model;

pub use local_file::LocalFile;
pub use profile::{ProfilePatch, ProfileState, Review, ServiceItem, WorkImage, MAX_WORK_IMAGES};
pub use view_model::{PresentationView, ReviewView, ServiceView, SocialLinkView, ViewModel};
