use super::{MappingError, parse_timestamp};
use crate::proto::SkinResponse;
use crate::texture;
use chrono::{DateTime, Utc};
use image::DynamicImage;

/// The current skin texture of a player, held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinInfo {
    /// The decoded skin texture.
    pub texture: DynamicImage,
    /// The moment when this data was originally fetched from the Mojang API.
    pub retrieved_at: DateTime<Utc>,
    /// Whether this is the default skin, as the player did not configure a custom one.
    pub default: bool,
}

impl TryFrom<SkinResponse> for SkinInfo {
    type Error = MappingError;

    fn try_from(response: SkinResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            texture: texture::decode(&response.bytes)?,
            retrieved_at: parse_timestamp(response.timestamp)?,
            default: response.default,
        })
    }
}
