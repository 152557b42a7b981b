use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use super::errors::RecipeError;

/// Media-relative directory holding recipe images.
pub const IMAGE_DIRECTORY: &str = "recipes/images";

static DATA_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^data:image/(?P<ext>png|jpe?g|gif|webp);base64,(?P<payload>.+)$")
        .expect("data url pattern")
});

/// Decoded recipe image, named after the SHA-256 of its content so that
/// identical uploads share one file.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeImage {
    pub path: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl RecipeImage {
    /// Parses a `data:image/<ext>;base64,<payload>` URL.
    pub fn from_data_url(raw: &str) -> Result<Self, RecipeError> {
        let captures = DATA_URL_PATTERN
            .captures(raw.trim())
            .ok_or(RecipeError::InvalidImage)?;
        let ext = match &captures["ext"] {
            "jpeg" => "jpg",
            other => other,
        };
        let payload: String = captures["payload"]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(payload)
            .map_err(|_| RecipeError::InvalidImage)?;
        if bytes.is_empty() {
            return Err(RecipeError::InvalidImage);
        }

        let digest = Sha256::digest(&bytes);
        Ok(Self {
            path: format!("{}/{:x}.{}", IMAGE_DIRECTORY, digest, ext),
            content_type: format!("image/{}", &captures["ext"]),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG
    const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn should_decode_png_data_url() {
        let image = RecipeImage::from_data_url(&format!("data:image/png;base64,{PIXEL}")).unwrap();

        assert!(image.path.starts_with("recipes/images/"));
        assert!(image.path.ends_with(".png"));
        assert_eq!(image.content_type, "image/png");
        assert_eq!(&image.bytes[1..4], b"PNG");
    }

    #[test]
    fn should_name_identical_content_identically() {
        let a = RecipeImage::from_data_url(&format!("data:image/png;base64,{PIXEL}")).unwrap();
        let b = RecipeImage::from_data_url(&format!("data:image/png;base64,\n{PIXEL}\n")).unwrap();

        assert_eq!(a.path, b.path);
    }

    #[test]
    fn should_normalize_jpeg_extension() {
        let image = RecipeImage::from_data_url("data:image/jpeg;base64,/9j/4AAQ").unwrap();

        assert!(image.path.ends_with(".jpg"));
        assert_eq!(image.content_type, "image/jpeg");
    }

    #[test]
    fn should_reject_unsupported_media_type() {
        let result = RecipeImage::from_data_url("data:image/svg+xml;base64,PHN2Zz4=");

        assert!(matches!(result.unwrap_err(), RecipeError::InvalidImage));
    }

    #[test]
    fn should_reject_plain_base64_without_prefix() {
        let result = RecipeImage::from_data_url(PIXEL);

        assert!(matches!(result.unwrap_err(), RecipeError::InvalidImage));
    }

    #[test]
    fn should_reject_corrupted_payload() {
        let result = RecipeImage::from_data_url("data:image/png;base64,@@not-base64@@");

        assert!(matches!(result.unwrap_err(), RecipeError::InvalidImage));
    }
}
