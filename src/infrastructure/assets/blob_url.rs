//! In-process object URL factory
//!
//! Mints `blob:profilecard/<seq>-<digest>` URLs. The digest is the first
//! eight hex characters of the file's SHA-256, which keeps URLs stable in
//! logs for the same picked file while `seq` keeps them unique.

use sha2::{Digest, Sha256};

use crate::domain::entities::LocalFile;
use crate::domain::ports::ObjectUrlFactory;

const URL_PREFIX: &str = "blob:profilecard/";

#[derive(Debug, Default)]
pub struct BlobUrlFactory {
    next_seq: u64,
}

impl BlobUrlFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ObjectUrlFactory for BlobUrlFactory {
    fn create(&mut self, file: &LocalFile) -> String {
        self.next_seq += 1;
        let digest = Sha256::digest(file.bytes());
        let short: String = format!("{:x}", digest).chars().take(8).collect();
        format!("{}{}-{}", URL_PREFIX, self.next_seq, short)
    }

    fn revoke(&mut self, url: &str) {
        tracing::trace!(url, "released object url");
    }
}
