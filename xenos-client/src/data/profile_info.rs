use super::{MappingError, parse_timestamp, parse_uuid};
use crate::proto::{ProfileProperty, ProfileResponse};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

/// The profile of a player.
///
/// Whether the properties carry signatures depends on whether Xenos is configured to request
/// signed profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInfo {
    /// The unique identifier that was requested.
    pub id: Uuid,
    /// The canonical username with the rectified capitalization.
    pub name: String,
    /// The auxiliary properties attached to this profile (e.g. `textures`).
    pub properties: HashSet<Property>,
    /// The moderative actions/sanctions that Mojang imposed on this profile.
    pub actions: HashSet<String>,
    /// The moment when this data was originally fetched from the Mojang API.
    pub retrieved_at: DateTime<Utc>,
}

/// A single property of a [`ProfileInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    /// The key of the property, e.g. `textures`.
    pub name: String,
    /// The Base64 encoded payload.
    pub value: String,
    /// The Yggdrasil signature, only present for signed profiles.
    pub signature: Option<String>,
}

impl From<ProfileProperty> for Property {
    fn from(property: ProfileProperty) -> Self {
        Self {
            name: property.name,
            value: property.value,
            signature: property.signature,
        }
    }
}

impl TryFrom<ProfileResponse> for ProfileInfo {
    type Error = MappingError;

    fn try_from(response: ProfileResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(response.uuid)?,
            name: response.name,
            properties: response.properties.into_iter().map(Property::from).collect(),
            actions: response.profile_actions.into_iter().collect(),
            retrieved_at: parse_timestamp(response.timestamp)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_original_data() {
        let id = Uuid::from_u128(0x9c09eef4_f68d_4387_9751_72bbff53d5a0);

        let response = ProfileResponse {
            timestamp: 65,
            uuid: id.to_string(),
            name: "Scrayos".to_string(),
            properties: vec![
                ProfileProperty {
                    name: "texture".to_string(),
                    value: "abc".to_string(),
                    signature: Some("cde".to_string()),
                },
                ProfileProperty {
                    name: "meta".to_string(),
                    value: "data".to_string(),
                    signature: None,
                },
            ],
            profile_actions: vec!["IMPORTANT_ACTION".to_string(), "OTHER_ACTION".to_string()],
        };

        let info = ProfileInfo::try_from(response).unwrap();

        assert_eq!(info.id, id);
        assert_eq!(info.name, "Scrayos");
        assert_eq!(
            info.properties,
            HashSet::from([
                Property {
                    name: "texture".to_string(),
                    value: "abc".to_string(),
                    signature: Some("cde".to_string()),
                },
                Property {
                    name: "meta".to_string(),
                    value: "data".to_string(),
                    signature: None,
                },
            ])
        );
        assert_eq!(
            info.actions,
            HashSet::from(["IMPORTANT_ACTION".to_string(), "OTHER_ACTION".to_string()])
        );
        assert_eq!(info.retrieved_at.timestamp(), 65);
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let property = ProfileProperty {
            name: "textures".to_string(),
            value: "abc".to_string(),
            signature: None,
        };

        let response = ProfileResponse {
            timestamp: 0,
            uuid: Uuid::from_u128(1).to_string(),
            name: "Scrayos".to_string(),
            properties: vec![property.clone(), property],
            profile_actions: vec!["FORCED_NAME_CHANGE".to_string(); 2],
        };

        let info = ProfileInfo::try_from(response).unwrap();

        assert_eq!(info.properties.len(), 1);
        assert_eq!(info.actions.len(), 1);
    }

    #[test]
    fn test_malformed_uuid_is_rejected() {
        let response = ProfileResponse {
            uuid: "9c09eef4".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            ProfileInfo::try_from(response),
            Err(MappingError::MalformedUuid { value, .. }) if value == "9c09eef4"
        ));
    }
}
