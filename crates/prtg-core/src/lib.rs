//! Domain layer between `prtg-api` and its consumers (CLI, scripts).
//!
//! - **[`Prtg`]**: the query façade. Each operation validates its inputs,
//!   performs one GET through [`prtg_api::PrtgClient`], and decodes the body
//!   according to the content kind the server declared.
//!
//! - **[`decode`]**: one decoding path per (response shape, format) pair.
//!   JSON and XML bodies describing the same thing decode to the same
//!   model values.
//!
//! - **Domain model** ([`model`]): sensor details, table rows, historic
//!   points and the recursive sensor tree (`Group`, `ProbeNode`, `Device`,
//!   `Sensor`).
//!
//! - **[`traverse`]**: a single depth-first walk over the tree with two
//!   consumers, [`flatten`] (one record per sensor with its group ladder)
//!   and [`render`] (indented text).

pub mod config;
pub mod controller;
pub mod convert;
pub mod decode;
pub mod error;
pub mod model;
pub mod traverse;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ClientConfig, TlsVerification};
pub use controller::{MAX_HISTORIC_RANGE_SECS, Prtg};
pub use decode::{Shape, ShapeKind, decode};
pub use error::{CoreError, DecodeError, ErrorKind};
pub use traverse::{FlatSensor, NodeKind, NodeRef, Visitor, flatten, render, walk};

pub use model::{
    Device, Group, HistoricDataResponse, HistoricPoint, HistoricValue, PrtgDate, ProbeNode,
    Sensor, SensorCounts, SensorDetail, SensorDetailResponse, SensorTree, TableContent,
    TableListResponse, TableRow,
};

// Credentials are built by callers and handed to `ClientConfig`.
pub use prtg_api::{ContentKind, Credentials, Secret};
