//! Asset lifecycle manager
//!
//! Owns every object URL created during an editing session. Each URL is
//! revoked exactly once: when superseded, or by `revoke_all` at teardown.
//! Revoking an unknown or already revoked URL does nothing.

use std::collections::BTreeSet;

use crate::domain::entities::LocalFile;
use crate::domain::ports::ObjectUrlFactory;
use crate::domain::value_objects::MediaUrl;

/// A picked file accepted by the manager, with its preview URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredAsset {
    pub url: MediaUrl,
    pub file: LocalFile,
}

/// Tracks live session object URLs
pub struct AssetLifecycleManager<F: ObjectUrlFactory> {
    factory: F,
    live: BTreeSet<String>,
}

impl<F: ObjectUrlFactory> AssetLifecycleManager<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            live: BTreeSet::new(),
        }
    }

    /// Mint a preview URL for an image file.
    ///
    /// Non-image files are dropped and yield `None`.
    pub fn register_local_file(&mut self, file: &LocalFile) -> Option<MediaUrl> {
        if !file.is_image() {
            tracing::debug!(
                file = file.name(),
                media_type = file.media_type(),
                "ignoring non-image file"
            );
            return None;
        }
        let url = self.factory.create(file);
        tracing::debug!(file = file.name(), url = %url, "registered preview url");
        self.live.insert(url.clone());
        Some(MediaUrl::session(url))
    }

    /// Register a batch from one file-input event.
    ///
    /// Non-images are dropped first, then at most `capacity` files are
    /// accepted in pick order. No URL is created for files beyond capacity.
    pub fn register_batch(
        &mut self,
        files: Vec<LocalFile>,
        capacity: usize,
    ) -> Vec<RegisteredAsset> {
        let picked = files.len();
        let accepted: Vec<RegisteredAsset> = files
            .into_iter()
            .filter(LocalFile::is_image)
            .take(capacity)
            .filter_map(|file| {
                let url = self.register_local_file(&file)?;
                Some(RegisteredAsset { url, file })
            })
            .collect();
        if accepted.len() < picked {
            tracing::debug!(picked, accepted = accepted.len(), capacity, "dropped files from batch");
        }
        accepted
    }

    /// Revoke a session URL. Returns true if it was live.
    pub fn revoke(&mut self, url: &MediaUrl) -> bool {
        if !url.is_session_preview() || !self.live.remove(url.as_str()) {
            return false;
        }
        self.factory.revoke(url.as_str());
        true
    }

    /// Revoke every live URL. Returns how many were revoked.
    pub fn revoke_all(&mut self) -> usize {
        let live = std::mem::take(&mut self.live);
        for url in &live {
            self.factory.revoke(url);
        }
        if !live.is_empty() {
            tracing::debug!(count = live.len(), "revoked all preview urls");
        }
        live.len()
    }

    pub fn is_live(&self, url: &MediaUrl) -> bool {
        url.is_session_preview() && self.live.contains(url.as_str())
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: ObjectUrlFactory> Drop for AssetLifecycleManager<F> {
    fn drop(&mut self) {
        self.revoke_all();
    }
}
