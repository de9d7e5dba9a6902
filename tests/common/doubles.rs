//! Recording implementations of the editor's host ports.

use std::cell::RefCell;

use profilecard::domain::ports::{
    FrameHandle, FrameScheduler, ObjectUrlFactory, ProfilePersistence, UploadService,
};
use profilecard::{CardError, CardResult, LocalFile, MediaUrl, ProfileState};

/// Object URL factory that records every create/revoke
#[derive(Debug, Default)]
pub struct RecordingUrls {
    pub created: Vec<String>,
    pub revoked: Vec<String>,
}

impl ObjectUrlFactory for RecordingUrls {
    fn create(&mut self, file: &LocalFile) -> String {
        let url = format!("blob:test/{}/{}", self.created.len(), file.name());
        self.created.push(url.clone());
        url
    }

    fn revoke(&mut self, url: &str) {
        self.revoked.push(url.to_string());
    }
}

/// Frame scheduler that hands out sequential handles
#[derive(Debug, Default)]
pub struct ManualFrames {
    next: u64,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

/// Upload service returning CDN URLs, optionally failing
#[derive(Debug, Default)]
pub struct CdnUploads {
    pub fail: bool,
    pub uploaded: RefCell<Vec<String>>,
}

impl UploadService for CdnUploads {
    fn upload(&self, file: &LocalFile) -> CardResult<MediaUrl> {
        if self.fail {
            return Err(CardError::Upload {
                file_name: file.name().to_string(),
                message: "storage unavailable".to_string(),
            });
        }
        self.uploaded.borrow_mut().push(file.name().to_string());
        Ok(MediaUrl::remote(format!("https://cdn.example/{}", file.name())))
    }
}

/// In-memory persistence, optionally failing
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub fail: bool,
    pub saved: RefCell<Vec<ProfileState>>,
}

impl ProfilePersistence for MemoryStore {
    fn save(&self, state: &ProfileState) -> CardResult<()> {
        if self.fail {
            return Err(CardError::Persistence {
                message: "503 Service Unavailable".to_string(),
            });
        }
        self.saved.borrow_mut().push(state.clone());
        Ok(())
    }
}
