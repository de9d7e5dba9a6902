//! Editor session
//!
//! Binds the editor's callbacks to the store, the asset manager, and the
//! preview shell for the lifetime of one editing session. The session owns
//! every object URL and animation frame it creates; `teardown` (also run on
//! drop) releases them.

use std::collections::BTreeMap;

use crate::application::store::{MediaSlot, ProfileStore};
use crate::config::PreviewConfig;
use crate::domain::entities::{
    LocalFile, ProfilePatch, ProfileState, ViewModel, WorkImage, MAX_WORK_IMAGES,
};
use crate::domain::ports::{
    EntitlementSource, FrameHandle, FrameScheduler, ObjectUrlFactory, PlaceholderCatalog,
    ProfilePersistence, RenderedCard, UploadService,
};
use crate::domain::services::{
    compose, live_page_url, CarouselCursor, ComposeFlags, DisplayMode, PreviewShell,
    SelectionOutcome,
};
use crate::domain::value_objects::{MediaUrl, SectionKey, TemplateId};
use crate::error::CardResult;
use crate::infrastructure::assets::AssetLifecycleManager;
use crate::infrastructure::templates::TemplateRegistry;

/// One editing session over a profile
pub struct EditorSession<F: ObjectUrlFactory, S: FrameScheduler> {
    store: ProfileStore,
    assets: AssetLifecycleManager<F>,
    frames: S,
    preview: PreviewShell,
    carousel: CarouselCursor,
    /// Picked files awaiting upload, keyed by their preview URL
    pending: BTreeMap<String, LocalFile>,
    torn_down: bool,
}

impl<F: ObjectUrlFactory, S: FrameScheduler> EditorSession<F, S> {
    pub fn new(store: ProfileStore, factory: F, frames: S, mode: DisplayMode) -> Self {
        let carousel = CarouselCursor::new(store.state().work_images.len());
        Self {
            store,
            assets: AssetLifecycleManager::new(factory),
            frames,
            preview: PreviewShell::new(mode),
            carousel,
            pending: BTreeMap::new(),
            torn_down: false,
        }
    }

    /// Session laid out for a viewport of `viewport_width` using `[preview]` settings
    pub fn from_config(
        store: ProfileStore,
        factory: F,
        frames: S,
        config: &PreviewConfig,
        viewport_width: u32,
        handle: Option<&str>,
    ) -> Self {
        let mode = DisplayMode::for_viewport(viewport_width, config.mobile_breakpoint);
        let session = Self::new(store, factory, frames, mode);
        match (config.live_base_url.as_deref(), handle) {
            (Some(base_url), Some(handle)) => session.with_live_page(base_url, handle),
            _ => session,
        }
    }

    /// Builder: point "visit live page" at `<base_url>/<handle>`
    pub fn with_live_page(mut self, base_url: &str, handle: &str) -> Self {
        self.preview.set_live_url(live_page_url(base_url, handle));
        self
    }

    pub fn state(&self) -> &ProfileState {
        self.store.state()
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn assets(&self) -> &AssetLifecycleManager<F> {
        &self.assets
    }

    pub fn frames(&self) -> &S {
        &self.frames
    }

    pub fn preview(&self) -> &PreviewShell {
        &self.preview
    }

    pub fn carousel(&self) -> &CarouselCursor {
        &self.carousel
    }

    /// Shallow-merge `patch` into the profile.
    ///
    /// Session previews of work images that the patch (or the image cap)
    /// drops are released immediately.
    pub fn update_state(&mut self, patch: ProfilePatch) {
        if patch.work_images.is_none() {
            self.store.update(patch);
            return;
        }

        let before: Vec<MediaUrl> = self
            .store
            .state()
            .work_images
            .iter()
            .map(|image| image.url.clone())
            .filter(MediaUrl::is_session_preview)
            .collect();
        self.store.update(patch);

        let kept = &self.store.state().work_images;
        let dropped: Vec<MediaUrl> = before
            .into_iter()
            .filter(|url| !kept.iter().any(|image| &image.url == url))
            .collect();
        for url in &dropped {
            self.release(url);
        }
        if !dropped.is_empty() {
            tracing::debug!(released = dropped.len(), "work image previews superseded");
        }
        self.carousel.sync_len(self.store.state().work_images.len());
    }

    pub fn set_section_visible(&mut self, key: SectionKey, visible: bool) {
        self.store.set_section_visible(key, visible);
    }

    pub fn is_section_visible(&self, key: SectionKey) -> bool {
        self.store.is_section_visible(key)
    }

    pub fn move_section_up(&mut self, index: usize) -> bool {
        self.store.move_section_up(index)
    }

    pub fn move_section_down(&mut self, index: usize) -> bool {
        self.store.move_section_down(index)
    }

    pub fn select_template(
        &mut self,
        requested: TemplateId,
        entitlement: &dyn EntitlementSource,
        on_upgrade: &mut dyn FnMut(TemplateId),
    ) -> SelectionOutcome {
        self.store.select_template(requested, entitlement, on_upgrade)
    }

    /// Cover photo picked. Returns false if the file was not accepted.
    pub fn on_cover_upload(&mut self, file: LocalFile) -> bool {
        self.upload_media(MediaSlot::Cover, file)
    }

    pub fn on_remove_cover(&mut self) {
        self.remove_media(MediaSlot::Cover);
    }

    /// Avatar picked. Returns false if the file was not accepted.
    pub fn on_avatar_upload(&mut self, file: LocalFile) -> bool {
        self.upload_media(MediaSlot::Avatar, file)
    }

    pub fn on_remove_avatar(&mut self) {
        self.remove_media(MediaSlot::Avatar);
    }

    /// Work images picked.
    ///
    /// Only image files are kept, and only as many as fit under
    /// [`MAX_WORK_IMAGES`], in pick order. Returns how many were added.
    pub fn on_add_work_images(&mut self, files: Vec<LocalFile>) -> usize {
        if self.torn_down {
            return 0;
        }
        let capacity = MAX_WORK_IMAGES.saturating_sub(self.store.state().work_images.len());
        let accepted = self.assets.register_batch(files, capacity);
        if accepted.is_empty() {
            return 0;
        }

        let mut images = self.store.state().work_images.clone();
        for asset in &accepted {
            images.push(WorkImage::new(
                asset.url.clone(),
                Some(asset.file.name().to_string()),
            ));
        }
        let added = accepted.len();
        for asset in accepted {
            self.pending.insert(asset.url.as_str().to_string(), asset.file);
        }
        self.update_state(ProfilePatch {
            work_images: Some(images),
            ..ProfilePatch::default()
        });
        added
    }

    /// Remove the work image at `index`, releasing its preview URL
    pub fn on_remove_work_image(&mut self, index: usize) -> Option<WorkImage> {
        let mut images = self.store.state().work_images.clone();
        if index >= images.len() {
            return None;
        }
        let removed = images.remove(index);
        self.release(&removed.url);
        self.update_state(ProfilePatch {
            work_images: Some(images),
            ..ProfilePatch::default()
        });
        Some(removed)
    }

    /// Publish the profile.
    ///
    /// Pending files are uploaded into a draft, the draft is saved, and the
    /// store is committed only once the save succeeds. Any upload or save
    /// failure is returned as-is and leaves the session untouched.
    pub fn on_submit(
        &mut self,
        persistence: &dyn ProfilePersistence,
        uploads: &dyn UploadService,
    ) -> CardResult<()> {
        let state = self.store.state();
        let mut draft = state.clone();

        for (slot, preview) in [
            (MediaSlot::Cover, &state.cover_photo_preview_url),
            (MediaSlot::Avatar, &state.avatar_preview_url),
        ] {
            let Some(file) = preview.as_ref().and_then(|url| self.pending.get(url.as_str()))
            else {
                continue;
            };
            let remote = uploads.upload(file)?;
            tracing::debug!(slot = slot.as_str(), url = %remote, "uploaded media");
            match slot {
                MediaSlot::Cover => draft.cover_photo_url = Some(remote),
                MediaSlot::Avatar => draft.avatar_url = Some(remote),
            }
        }
        draft.cover_photo_preview_url = None;
        draft.avatar_preview_url = None;

        for image in &mut draft.work_images {
            if let Some(file) = self.pending.get(image.url.as_str()) {
                image.url = uploads.upload(file)?;
            }
        }
        draft.work_images.retain(|image| !image.url.is_transient());

        if let Err(e) = persistence.save(&draft) {
            tracing::warn!(error = %e, "publish failed");
            return Err(e);
        }

        let released = self.assets.revoke_all();
        self.pending.clear();
        self.store.mark_published(draft);
        self.carousel.sync_len(self.store.state().work_images.len());
        tracing::debug!(released, "profile published");
        Ok(())
    }

    /// Discard unpublished edits and every session preview
    pub fn on_reset_page(&mut self) {
        self.assets.revoke_all();
        self.pending.clear();
        self.store.reset();
        self.carousel.sync_len(self.store.state().work_images.len());
    }

    /// Compose the current view model
    pub fn view_model(
        &self,
        catalog: &dyn PlaceholderCatalog,
        entitlement: &dyn EntitlementSource,
    ) -> ViewModel {
        let state = self.store.state();
        compose(
            state,
            &state.visibility,
            ComposeFlags {
                has_saved_data: self.store.has_saved_data(),
                subscribed: entitlement.is_subscribed(),
            },
            catalog,
        )
    }

    /// Render the live preview with the effective template
    pub fn render(
        &self,
        registry: &TemplateRegistry,
        catalog: &dyn PlaceholderCatalog,
        entitlement: &dyn EntitlementSource,
    ) -> Option<RenderedCard> {
        registry.render(&self.view_model(catalog, entitlement))
    }

    /// Viewport width changed
    pub fn set_viewport(&mut self, width: u32, mobile_breakpoint: u32) {
        self.preview
            .set_mode(DisplayMode::for_viewport(width, mobile_breakpoint), &mut self.frames);
    }

    pub fn toggle_preview(&mut self, measured_height: f64) {
        if !self.torn_down {
            self.preview.toggle(measured_height, &mut self.frames);
        }
    }

    pub fn on_content_resized(&mut self, height: f64) -> bool {
        self.preview.on_content_resized(height)
    }

    pub fn on_transition_end(&mut self) {
        self.preview.on_transition_end();
    }

    pub fn start_carousel(&mut self) {
        if !self.torn_down {
            self.carousel.start_auto_scroll(&mut self.frames);
        }
    }

    /// Deliver a fired animation frame
    pub fn on_frame(&mut self, handle: FrameHandle) {
        self.preview.on_frame(handle);
        self.carousel.on_frame(handle, &mut self.frames);
    }

    /// End the session: revoke every preview URL and cancel pending frames.
    ///
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        let revoked = self.assets.revoke_all();
        self.pending.clear();
        self.preview.dispose(&mut self.frames);
        self.carousel.stop(&mut self.frames);
        tracing::debug!(revoked, "editor session torn down");
    }

    fn upload_media(&mut self, slot: MediaSlot, file: LocalFile) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(url) = self.assets.register_local_file(&file) else {
            return false;
        };
        self.pending.insert(url.as_str().to_string(), file);
        if let Some(previous) = self.store.set_preview(slot, Some(url)) {
            self.release(&previous);
        }
        true
    }

    fn remove_media(&mut self, slot: MediaSlot) {
        if let Some(previous) = self.store.clear_media(slot) {
            self.release(&previous);
        }
    }

    fn release(&mut self, url: &MediaUrl) {
        self.pending.remove(url.as_str());
        self.assets.revoke(url);
    }
}

impl<F: ObjectUrlFactory, S: FrameScheduler> Drop for EditorSession<F, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
