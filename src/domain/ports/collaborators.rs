//! Collaborator ports - persistence, upload, and entitlement
//!
//! These sit at the boundary of the core. Failures from persistence and
//! upload are returned unmodified; the core never retries.

use crate::domain::entities::{LocalFile, ProfileState};
use crate::domain::value_objects::MediaUrl;
use crate::error::CardResult;

/// Receives the full profile on publish
pub trait ProfilePersistence {
    fn save(&self, state: &ProfileState) -> CardResult<()>;
}

/// Stores a picked file durably and returns its remote URL
pub trait UploadService {
    /// Implementations must return a [`MediaUrl::remote`] URL.
    fn upload(&self, file: &LocalFile) -> CardResult<MediaUrl>;
}

/// Answers whether the account may use non-default templates
pub trait EntitlementSource {
    fn is_subscribed(&self) -> bool;
}

impl EntitlementSource for bool {
    fn is_subscribed(&self) -> bool {
        *self
    }
}
