use super::{MappingError, parse_timestamp};
use crate::proto::CapeResponse;
use crate::texture;
use chrono::{DateTime, Utc};
use image::DynamicImage;

/// The current cape texture of a player, held in memory.
///
/// There is no "default" cape: players without a cape have no [`CapeInfo`] at all.
#[derive(Debug, Clone, PartialEq)]
pub struct CapeInfo {
    /// The decoded cape texture.
    pub texture: DynamicImage,
    /// The moment when this data was originally fetched from the Mojang API.
    pub retrieved_at: DateTime<Utc>,
}

impl TryFrom<CapeResponse> for CapeInfo {
    type Error = MappingError;

    fn try_from(response: CapeResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            texture: texture::decode(&response.bytes)?,
            retrieved_at: parse_timestamp(response.timestamp)?,
        })
    }
}
