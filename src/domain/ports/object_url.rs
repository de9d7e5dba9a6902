//! ObjectUrlFactory port - mints and releases local object URLs
//!
//! In a browser host this wraps `URL.createObjectURL`/`revokeObjectURL`.
//! The asset manager owns bookkeeping; implementations only do the host call.

use crate::domain::entities::LocalFile;

/// Host facility that turns a picked file into a locally resolvable URL
pub trait ObjectUrlFactory {
    /// Create a new URL for the file. Each call must return a distinct URL.
    fn create(&mut self, file: &LocalFile) -> String;

    /// Release a URL previously returned by `create`
    fn revoke(&mut self, url: &str);
}
