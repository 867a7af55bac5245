use super::{MappingError, parse_timestamp};
use crate::proto::HeadResponse;
use crate::texture;
use chrono::{DateTime, Utc};
use image::DynamicImage;

/// The current head texture of a player, held in memory.
///
/// Whether the overlay skin layer is part of the texture is decided when requesting it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadInfo {
    /// The decoded head texture.
    pub texture: DynamicImage,
    /// The moment when this data was originally fetched from the Mojang API.
    pub retrieved_at: DateTime<Utc>,
    /// Whether this is cut from the default skin, as the player did not configure a custom one.
    pub default: bool,
}

impl TryFrom<HeadResponse> for HeadInfo {
    type Error = MappingError;

    fn try_from(response: HeadResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            texture: texture::decode(&response.bytes)?,
            retrieved_at: parse_timestamp(response.timestamp)?,
            default: response.default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_TEST: &[u8] = include_bytes!("../../tests/resources/image_test.png");

    #[test]
    fn test_contains_original_data() {
        let response = HeadResponse {
            timestamp: 60,
            bytes: IMAGE_TEST.to_vec(),
            default: false,
        };

        let info = HeadInfo::try_from(response).unwrap();

        assert_eq!(info.retrieved_at.timestamp(), 60);
        assert_eq!(info.texture, texture::decode(IMAGE_TEST).unwrap());
        assert!(!info.default);
    }
}
