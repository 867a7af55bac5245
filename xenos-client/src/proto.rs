//! # Xenos Wire Schema
//!
//! The protobuf messages and gRPC stubs of the `scrayosnet.xenos.Profile` service.
//!
//! The bindings are generated from `proto/xenos.proto` and checked in, so building this crate
//! does not require `protoc`. Regenerate them with:
//!
//! ```sh
//! cargo run -p xenos-client --features gen-proto --bin generate-xenos-service
//! ```
//!
//! Besides the client stub used by [`crate::client::XenosClient`], the server stub is exported
//! as well. It allows hosting an in-process Xenos (e.g. a fake for tests) that can be handed to
//! [`crate::client::XenosClient::from_service`].
mod generated;

pub use generated::scrayosnet_xenos::*;
