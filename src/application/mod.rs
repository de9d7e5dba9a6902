//! Application Layer
//!
//! Use cases that orchestrate an editing session.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ProfileStore` - Canonical profile state with update/reset/publish
//! - `EditorSession` - Editor callbacks, media lifecycle, publish flow

pub mod editor;
pub mod store;

pub use editor::EditorSession;
pub use store::{MediaSlot, ProfileStore};
