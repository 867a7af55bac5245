use super::{MappingError, parse_timestamp, parse_uuid};
use crate::proto::{UuidResponse, UuidsResponse};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// The UUID and canonical username of a player.
///
/// The canonical name may differ from the requested name in its capitalization but is
/// guaranteed to be equal, ignoring the case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UuidInfo {
    /// The unique identifier that belongs to the requested username.
    pub id: Uuid,
    /// The canonical username with the capitalization as specified in the profile.
    pub username: String,
    /// The moment when this data was originally fetched from the Mojang API.
    pub retrieved_at: DateTime<Utc>,
}

impl UuidInfo {
    /// Maps a single resolution. A response without data means the username could not be resolved.
    pub(crate) fn from_response(response: UuidResponse) -> Result<Option<Self>, MappingError> {
        let Some(data) = response.data else {
            return Ok(None);
        };

        Ok(Some(Self {
            id: parse_uuid(data.uuid)?,
            username: data.username,
            retrieved_at: parse_timestamp(response.timestamp)?,
        }))
    }
}

/// Maps a batch resolution, keyed by the lowercase username.
///
/// Unresolved usernames are dropped. If two keys only differ in their case, the one that is
/// visited last wins.
pub(crate) fn resolved_uuids(
    response: UuidsResponse,
) -> Result<HashMap<String, UuidInfo>, MappingError> {
    let mut resolved = HashMap::with_capacity(response.resolved.len());

    for (name, result) in response.resolved {
        if let Some(info) = UuidInfo::from_response(result)? {
            resolved.insert(name.to_lowercase(), info);
        }
    }

    Ok(resolved)
}
