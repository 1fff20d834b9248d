//! Client core for a same-day delivery dispatch API.
//!
//! # Overview
//! Models delivery jobs as validated records, serializes them to the
//! provider's JSON contract and submits them over HTTP, classifying the
//! outcome into validation, connector or API errors.
//!
//! # Design
//! - `types` holds the job model. `to_wire` on each record is the one place
//!   required fields are checked; setters only normalize single fields.
//! - `http` describes requests and responses as plain data.
//! - `connector` owns the single blocking round-trip and the status
//!   classification. No retries, no background work.
//! - `client` maps the jobs resource onto the connector.

pub mod client;
pub mod config;
pub mod connector;
pub mod error;
pub mod http;
pub mod types;

pub use client::JobsClient;
pub use config::ConnectorConfig;
pub use connector::{interpret_response, HttpConnector, Transport, UreqTransport};
pub use error::{Error, Result, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Address, Job, JobItem, PaymentMethod};
