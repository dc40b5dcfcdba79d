use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::domain::Project;

/// Default maximum length of the encoded VEX string (20 MB)
pub const DEFAULT_MAX_VEX_LENGTH: usize = 20_000_000;

/// UploadSizeGuard bounds the inbound payload before it is decoded or parsed
///
/// Larger documents must go through the multipart upload endpoint, which
/// streams instead of buffering an encoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadSizeGuard {
    max_length: usize,
}

impl UploadSizeGuard {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// # Errors
    /// Returns `VexError::PayloadTooLarge` when `payload` exceeds the limit
    pub fn check(&self, payload: &str) -> Result<()> {
        if payload.len() > self.max_length {
            return Err(VexError::PayloadTooLarge {
                length: payload.len(),
                limit: self.max_length,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for UploadSizeGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VEX_LENGTH)
    }
}

/// CollectionProjectGuard rejects uploads targeting collection projects
pub struct CollectionProjectGuard;

impl CollectionProjectGuard {
    /// # Errors
    /// Returns `VexError::CollectionProjectRejected` when the project aggregates other projects
    pub fn check(project: &Project) -> Result<()> {
        if project.is_collection() {
            return Err(VexError::CollectionProjectRejected {
                project: project.label(),
            }
            .into());
        }
        Ok(())
    }
}
