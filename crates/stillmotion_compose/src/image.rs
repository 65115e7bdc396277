//! Image loading.

use std::path::Path;
use stillmotion_core::ImageAttachment;
use stillmotion_error::{InputError, InputErrorKind};
use tracing::{debug, instrument};

/// MIME type for an image path, by extension. Unknown extensions map to PNG.
///
/// ```
/// use stillmotion_compose::media_type_for;
///
/// assert_eq!(media_type_for("shot.JPG".as_ref()), "image/jpeg");
/// assert_eq!(media_type_for("shot.tiff".as_ref()), "image/png");
/// ```
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Reads an image file.
///
/// # Errors
///
/// `ImageNotFound` when the file does not exist, `Read` for any other I/O
/// failure.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_image(path: &Path) -> Result<ImageAttachment, InputError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InputError::new(InputErrorKind::ImageNotFound(path.display().to_string()))
        } else {
            InputError::new(InputErrorKind::Read(format!("{}: {}", path.display(), e)))
        }
    })?;

    let media_type = media_type_for(path);
    debug!(media_type, size = bytes.len(), "Loaded image");

    Ok(ImageAttachment::new(media_type, bytes))
}
