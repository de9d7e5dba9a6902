//! Domain Layer
//!
//! Pure profile logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Profile state, picked files, and the render-ready view model
//! - `value_objects/` - Template ids, section keys, media URLs, ratings
//! - `services/` - Composition, section ordering, template gating, preview shell
//! - `ports/` - Interfaces for renderers and host/collaborator facilities
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Composition is deterministic and side-effect free
//! 3. **Ports & Adapters** - Host facilities go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
