use anyhow::{anyhow, Context, Result};
use base64::Engine;
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// An image ready to send to a vision provider.
///
/// Input images are decoded once to validate them and re-encoded as JPEG,
/// so providers only ever see one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageAttachment {
    /// Load and validate an image file (jpg, png, gif, webp, ...)
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Could not read image {}", path.display()))?;
        Self::from_bytes(&bytes)
    }

    /// Validate raw image bytes; the format is sniffed from the content
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img =
            image::load_from_memory(bytes).map_err(|e| anyhow!("Invalid image data: {}", e))?;
        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        let mut data = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut data), ImageFormat::Jpeg)
            .map_err(|e| anyhow!("Failed to encode image: {}", e))?;

        Ok(Self {
            mime_type: "image/jpeg".to_string(),
            data,
        })
    }

    /// Standard base64 of the encoded bytes, as inline request payloads expect
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}
