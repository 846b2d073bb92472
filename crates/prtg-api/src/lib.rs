// prtg-api: Async Rust client for the PRTG Network Monitor HTTP API
//
// This crate is the fetch collaborator: it knows how to reach a PRTG server,
// authenticate each request, and hand back the raw body together with the
// content kind the server declared. It also owns the wire types, one set per
// (response shape, format) pair, that `prtg-core` decodes into its model.

pub mod auth;
pub mod client;
pub mod content;
pub mod error;
pub mod request;
pub mod transport;
pub mod wire;

pub use auth::{Credentials, Secret};
pub use client::{Payload, PrtgClient};
pub use content::ContentKind;
pub use error::Error;
pub use request::{Endpoint, Request};
pub use transport::{TlsMode, TransportConfig, timeout_from_millis};
