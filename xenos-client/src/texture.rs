//! # Texture Decoding
//!
//! Xenos delivers skins, capes and heads as encoded image bytes. This module turns those bytes
//! into an in-memory [`DynamicImage`].
//!
//! The format is guessed from the magic bytes of the buffer, so the decoder does not depend on
//! the encoding that Xenos chose. The image keeps the colour type it was encoded with, which
//! means that the alpha channel (and therefore the opacity of the texture) is preserved.
use image::DynamicImage;

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("Image cannot be created from empty bytes!")]
    Empty,
    #[error("Failed to decode image: '{0}'")]
    Decode(#[from] image::ImageError),
}

/// Decodes the supplied bytes into an image, regardless of the format that was used to encode them.
///
/// # Returns
///
/// * `Ok(DynamicImage)` - The decoded texture.
/// * `Err(TextureError::Empty)` - If `bytes` is empty.
/// * `Err(TextureError::Decode)` - If the format is unknown or the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, TextureError> {
    if bytes.is_empty() {
        return Err(TextureError::Empty);
    }

    Ok(image::load_from_memory(bytes)?)
}
