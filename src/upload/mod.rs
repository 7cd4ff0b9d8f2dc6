pub mod preview;
pub mod validate;

use axum::body::Bytes;

/// A file the user picked, pending validation. Lives only for the duration
/// of one selection; a rejected candidate is never handed onward.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}
