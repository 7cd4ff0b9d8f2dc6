use super::UploadCandidate;

/// Exactly 5 MiB is still accepted; one byte more is not.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotAnImage,
    TooLarge,
}

impl Rejection {
    /// Inline message shown next to the upload control.
    pub fn message(self) -> &'static str {
        match self {
            Rejection::NotAnImage => "Please select a valid image file.",
            Rejection::TooLarge => "Image must be less than 5MB.",
        }
    }
}

/// Type is checked before size; the first failing check wins and the size
/// check is skipped entirely for non-images.
pub fn validate(candidate: &UploadCandidate) -> Result<(), Rejection> {
    let is_image = candidate
        .content_type
        .as_deref()
        .map(|ty| ty.starts_with("image/"))
        .unwrap_or(false);
    if !is_image {
        return Err(Rejection::NotAnImage);
    }

    if candidate.bytes.len() > MAX_IMAGE_BYTES {
        return Err(Rejection::TooLarge);
    }

    Ok(())
}
