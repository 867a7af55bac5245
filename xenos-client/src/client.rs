//! # Xenos Client
//!
//! This module implements the lookups against the gRPC interface of Xenos.
//!
//! The [`XenosClient`] owns exactly one channel. Creating the client does not open a connection,
//! the channel connects lazily on the first lookup. All lookups take `&self`, so a single client
//! can be shared and used for many concurrent lookups, which are multiplexed over the channel.
//!
//! ## Lookup contract
//!
//! The single-entity lookups ([`XenosClient::get_uuid`], [`XenosClient::get_profile`],
//! [`XenosClient::get_skin`], [`XenosClient::get_cape`] and [`XenosClient::get_head`]) translate
//! the gRPC status of a failed request:
//!
//! * `NOT_FOUND` - `Ok(None)`, the player (or texture) does not exist.
//! * `UNAVAILABLE` - `Err(XenosError::Unavailable)`, Xenos could not serve the request. This is
//!   not retried.
//! * Anything else - `Err(XenosError::Status)` with the original status.
//!
//! The batch lookup ([`XenosClient::get_uuids`]) does not translate anything: unresolved names
//! are simply missing from the result and every failed status is returned unchanged.
//!
//! ## Example
//!
//! ```rust,no_run
//! use xenos_client::client::XenosClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = XenosClient::new("localhost")?;
//!
//! if let Some(uuid) = client.get_uuid("scrayos").await? {
//!     let head = client.get_head(uuid.id, true).await?;
//!     println!("{} has a default head: {:?}", uuid.username, head.map(|h| h.default));
//! }
//!
//! client.close().await;
//! # Ok(())
//! # }
//! ```
mod connection;
mod outcome;

pub use connection::SHUTDOWN_GRACE_PERIOD;

use crate::{
    BoxError,
    config::{DEFAULT_XENOS_PORT, XenosConfig},
    data::{self, CapeInfo, HeadInfo, MappingError, ProfileInfo, SkinInfo, UuidInfo},
    proto::{
        CapeRequest, HeadRequest, ProfileRequest, SkinRequest, UuidRequest, UuidsRequest,
        profile_client::ProfileClient,
    },
};
use connection::Connection;
use http_body::Body as HttpBody;
use outcome::Outcome;
use std::{collections::HashMap, fmt, time::Duration};
use tonic::transport::{Channel, Endpoint};
use tracing::debug;
use uuid::Uuid;

/// Errors that can occur when creating a [`XenosClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("Invalid Xenos address '{host}:{port}': '{source}'")]
    InvalidAddress {
        host: String,
        port: u16,
        #[source]
        source: http::Error,
    },
}

/// Errors that can occur during a lookup.
#[derive(Debug, thiserror::Error)]
pub enum XenosError {
    /// Xenos is not able to serve the lookup. Retrying is pointless.
    #[error("Xenos could not fetch the requested {lookup}: '{status}'")]
    Unavailable {
        lookup: Lookup,
        #[source]
        status: tonic::Status,
    },
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error(transparent)]
    Status(#[from] tonic::Status),
}

/// The kind of single-entity lookup, used to report which lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Uuid,
    Profile,
    Skin,
    Cape,
    Head,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lookup::Uuid => "uuid",
            Lookup::Profile => "profile",
            Lookup::Skin => "skin",
            Lookup::Cape => "cape",
            Lookup::Head => "head",
        };
        f.write_str(name)
    }
}

/// The client for the gRPC interface of Xenos.
///
/// The generic parameter `S` is the underlying gRPC service, a [`Channel`] unless the client
/// was created with [`XenosClient::from_service`].
pub struct XenosClient<S = Channel> {
    connection: Connection<S>,
}

impl XenosClient<Channel> {
    /// Creates a client for Xenos at `host`, listening on the [default port](DEFAULT_XENOS_PORT).
    ///
    /// No connection is established until the first lookup. Must be called within a Tokio
    /// runtime.
    pub fn new(host: &str) -> Result<Self, ClientBuildError> {
        Self::with_port(host, DEFAULT_XENOS_PORT)
    }

    /// Creates a client for Xenos at `host:port`. The connection is plaintext and lazy.
    ///
    /// `host` may be a hostname, an IPv4 literal or an IPv6 literal (with or without brackets).
    pub fn with_port(host: &str, port: u16) -> Result<Self, ClientBuildError> {
        let uri = http::Uri::builder()
            .scheme("http")
            .authority(authority(host, port))
            .path_and_query("/")
            .build()
            .map_err(|source| ClientBuildError::InvalidAddress {
                host: host.to_string(),
                port,
                source,
            })?;

        debug!(%uri, "creating lazy xenos channel");

        let channel = Endpoint::from(uri).connect_lazy();

        Ok(Self::from_service(channel))
    }

    /// Creates a client from the address in `config`.
    pub fn from_config(config: &XenosConfig) -> Result<Self, ClientBuildError> {
        Self::with_port(&config.host, config.port)
    }
}

/// Joins `host` and `port`, IPv6 literals need brackets to be told apart from the port.
fn authority(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

impl<S> XenosClient<S>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Creates a client from an existing Tonic service/channel.
    pub fn from_service(service: S) -> Self {
        Self {
            connection: Connection::new(ProfileClient::new(service)),
        }
    }

    /// Overrides how long [`XenosClient::close`] waits for in-flight lookups.
    ///
    /// Defaults to [`SHUTDOWN_GRACE_PERIOD`].
    pub fn with_shutdown_grace_period(mut self, grace_period: Duration) -> Self {
        self.connection.set_grace_period(grace_period);
        self
    }

    /// Resolves the UUID and the canonical username of `name`.
    ///
    /// The name does not have to be in the correct case.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(UuidInfo))` - The resolved player.
    /// * `Ok(None)` - No player with this name exists.
    /// * `Err(XenosError)` - Xenos is unavailable or the request failed.
    pub async fn get_uuid(&self, name: &str) -> Result<Option<UuidInfo>, XenosError> {
        let request = UuidRequest {
            username: name.to_string(),
        };

        let result = self
            .connection
            .call(|mut stub| async move { stub.get_uuid(request).await })
            .await;

        match Outcome::from(result).into_lookup(Lookup::Uuid)? {
            Some(response) => Ok(UuidInfo::from_response(response)?),
            None => Ok(None),
        }
    }

    /// Resolves the UUIDs of `names` within a single round trip.
    ///
    /// The keys of the returned map are the lowercase names, so names that only differ in their
    /// case are collapsed into one entry. Names that could not be resolved are missing.
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap)` - The resolved players, possibly empty.
    /// * `Err(XenosError::Status)` - The request failed, the status is not translated.
    pub async fn get_uuids<I, N>(&self, names: I) -> Result<HashMap<String, UuidInfo>, XenosError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let request = UuidsRequest {
            usernames: names.into_iter().map(Into::into).collect(),
        };

        let response = self
            .connection
            .call(|mut stub| async move { stub.get_uuids(request).await })
            .await?;

        Ok(data::resolved_uuids(response)?)
    }

    /// Retrieves the profile of the player `id`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ProfileInfo))` - The profile of the player.
    /// * `Ok(None)` - No player with this id exists.
    /// * `Err(XenosError)` - Xenos is unavailable or the request failed.
    pub async fn get_profile(&self, id: Uuid) -> Result<Option<ProfileInfo>, XenosError> {
        let request = ProfileRequest {
            uuid: id.to_string(),
        };

        let result = self
            .connection
            .call(|mut stub| async move { stub.get_profile(request).await })
            .await;

        Outcome::from(result)
            .into_lookup(Lookup::Profile)?
            .map(ProfileInfo::try_from)
            .transpose()
            .map_err(XenosError::from)
    }

    /// Retrieves the current skin of the player `id`.
    ///
    /// Players without a custom skin get the default skin, flagged with [`SkinInfo::default`].
    pub async fn get_skin(&self, id: Uuid) -> Result<Option<SkinInfo>, XenosError> {
        let request = SkinRequest {
            uuid: id.to_string(),
        };

        let result = self
            .connection
            .call(|mut stub| async move { stub.get_skin(request).await })
            .await;

        Outcome::from(result)
            .into_lookup(Lookup::Skin)?
            .map(SkinInfo::try_from)
            .transpose()
            .map_err(XenosError::from)
    }

    /// Retrieves the current cape of the player `id`.
    ///
    /// Returns `Ok(None)` if the player does not exist or has no cape.
    pub async fn get_cape(&self, id: Uuid) -> Result<Option<CapeInfo>, XenosError> {
        let request = CapeRequest {
            uuid: id.to_string(),
        };

        let result = self
            .connection
            .call(|mut stub| async move { stub.get_cape(request).await })
            .await;

        Outcome::from(result)
            .into_lookup(Lookup::Cape)?
            .map(CapeInfo::try_from)
            .transpose()
            .map_err(XenosError::from)
    }

    /// Retrieves the current head of the player `id`, optionally including the overlay skin layer.
    pub async fn get_head(
        &self,
        id: Uuid,
        include_overlay: bool,
    ) -> Result<Option<HeadInfo>, XenosError> {
        let request = HeadRequest {
            uuid: id.to_string(),
            overlay: include_overlay,
        };

        let result = self
            .connection
            .call(|mut stub| async move { stub.get_head(request).await })
            .await;

        Outcome::from(result)
            .into_lookup(Lookup::Head)?
            .map(HeadInfo::try_from)
            .transpose()
            .map_err(XenosError::from)
    }

    /// Closes the channel to Xenos.
    ///
    /// Lookups that are issued afterwards fail immediately with an `UNAVAILABLE` status. Lookups
    /// that are in flight get [a grace period](Self::with_shutdown_grace_period) to finish before
    /// they are aborted. This method never fails and can be called any number of times.
    pub async fn close(&self) {
        self.connection.close().await;
    }
}
