use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;
use uuid::Uuid;

/// A stored preview image. Dropping the handle removes the file, so a
/// preview can never outlive the selection that produced it.
pub struct PreviewHandle {
    path: PathBuf,
    url: String,
    created_at: DateTime<Utc>,
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to remove preview {}: {}", self.path.display(), err);
            }
        }
    }
}

/// At most one preview per session. Storing a new one drops the previous
/// handle, which removes its file; so does rejection and store teardown.
pub struct PreviewStore {
    cache_dir: PathBuf,
    previews: DashMap<String, PreviewHandle>,
}

impl PreviewStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            previews: DashMap::new(),
        }
    }

    pub fn put(
        &self,
        session_id: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> std::io::Result<(String, DateTime<Utc>)> {
        let file_name = format!("{}.{}", Uuid::new_v4(), extension_for(content_type));
        let path = self.cache_dir.join(&file_name);
        fs::write(&path, bytes)?;

        let handle = PreviewHandle {
            path,
            url: format!("/cache/{}", file_name),
            created_at: Utc::now(),
        };
        let url = handle.url.clone();
        let created_at = handle.created_at;

        // The replaced handle, if any, is dropped here and its file removed.
        self.previews.insert(session_id.to_string(), handle);

        Ok((url, created_at))
    }

    pub fn clear(&self, session_id: &str) {
        self.previews.remove(session_id);
    }

    pub fn preview_url(&self, session_id: &str) -> Option<String> {
        self.previews.get(session_id).map(|h| h.url().to_string())
    }
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "jpg",
    }
}
