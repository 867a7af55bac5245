//! # Xenos Client
//!
//! `xenos-client` is a client library for the gRPC interface of [Xenos](https://github.com/scrayosnet/xenos),
//! a caching proxy in front of the Mojang API. It resolves player names to UUIDs and retrieves
//! the profiles, skins, capes and heads of players.
//!
//! ## Key Components
//!
//! * **[`XenosClient`]:** The main entry point. It owns the channel to Xenos, performs the lookups
//!   and shuts the channel down gracefully.
//! * **[`data`]:** The records that are returned by the lookups, mapped from the wire messages into
//!   idiomatic types (UUIDs, timestamps and decoded images).
//! * **[`XenosConfig`]:** The address of Xenos, ready to be embedded into an application config.
//!
//! ## Feature Flags (Internal use only)
//!
//! * `gen-proto`: Enables the generator for the Xenos service bindings (internal use).
//!
//! ## Re-exports
//!
//! This crate re-exports `chrono`, `image`, `prost`, `tonic` and `uuid`, as their types are part
//! of the public API.
//!
//! See the README.md for more details about usage.
pub mod client;
pub mod config;
pub mod data;
pub mod proto;
pub mod texture;

pub use client::{ClientBuildError, Lookup, XenosClient, XenosError};
pub use config::XenosConfig;

// Re-exports
pub use chrono;
pub use image;
pub use prost;
pub use tonic;
pub use uuid;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
