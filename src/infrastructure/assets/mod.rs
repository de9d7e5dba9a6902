//! Local asset handling
//!
//! Object URL bookkeeping for images picked in the editor.

mod blob_url;
mod manager;

pub use blob_url::BlobUrlFactory;
pub use manager::{AssetLifecycleManager, RegisteredAsset};
