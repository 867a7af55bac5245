//! # Lookup Results
//!
//! The value records returned by [`crate::client::XenosClient`] and the mappers that build them
//! from the raw protobuf responses.
//!
//! The records drop everything related to their gRPC origin. Every record carries the moment
//! when Xenos originally fetched the data from the Mojang API (`retrieved_at`), so that stale
//! data can be identified by the caller.
//!
//! Mapping never falls back to defaults: a malformed identifier, an out of range timestamp or
//! an undecodable texture is reported as a [`MappingError`].
mod cape_info;
mod head_info;
mod profile_info;
mod skin_info;
mod uuid_info;

pub use cape_info::CapeInfo;
pub use head_info::HeadInfo;
pub use profile_info::{ProfileInfo, Property};
pub use skin_info::SkinInfo;
pub use uuid_info::UuidInfo;
pub(crate) use uuid_info::resolved_uuids;

use crate::texture::TextureError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Errors that can occur while converting a Xenos response into a lookup result.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("Xenos responded with a malformed uuid '{value}': '{source}'")]
    MalformedUuid {
        value: String,
        #[source]
        source: uuid::Error,
    },
    #[error("Xenos responded with an out of range timestamp '{0}'")]
    MalformedTimestamp(u64),
    #[error("Xenos responded with an invalid texture: '{0}'")]
    Texture(#[from] TextureError),
}

fn parse_uuid(value: String) -> Result<Uuid, MappingError> {
    match Uuid::parse_str(&value) {
        Ok(id) => Ok(id),
        Err(source) => Err(MappingError::MalformedUuid { value, source }),
    }
}

/// Xenos transmits all timestamps as seconds since the unix epoch.
fn parse_timestamp(seconds: u64) -> Result<DateTime<Utc>, MappingError> {
    i64::try_from(seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or(MappingError::MalformedTimestamp(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uuid_rejects_malformed_input() {
        let result = parse_uuid("not-a-uuid".to_string());

        assert!(matches!(
            result,
            Err(MappingError::MalformedUuid { value, .. }) if value == "not-a-uuid"
        ));
    }

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp(65).unwrap();

        assert_eq!(parsed.timestamp(), 65);
        assert_eq!(parse_timestamp(0).unwrap().timestamp(), 0);
    }

    #[test]
    fn test_parse_timestamp_rejects_out_of_range() {
        assert!(matches!(
            parse_timestamp(u64::MAX),
            Err(MappingError::MalformedTimestamp(u64::MAX))
        ));
    }
}
