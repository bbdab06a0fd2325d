//! Typed async client for the twitterapi.io data API.
//!
//! # Overview
//! Every operation builds a query string or JSON body, issues a single
//! request carrying the `X-API-Key` header, and decodes the JSON reply into a
//! typed shape. List endpoints converge on [`PagedResult`] regardless of
//! whether the upstream wrapped the list in `{status, msg, data}`.
//!
//! # Design
//! - [`TwitterApiClient`] is stateless: `build_*` produces an [`HttpRequest`],
//!   `parse_*` consumes an [`HttpResponse`]. No I/O happens there.
//! - [`Transport`] executes requests; [`ReqwestTransport`] is the default.
//! - [`TwitterApi`] composes the two and exposes resource handles
//!   (`users()`, `tweets()`, ...). No retries, no pagination loops: cursors
//!   are passed through verbatim.

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod query;
pub mod resources;
pub mod transport;
pub mod types;

pub use api::TwitterApi;
pub use client::TwitterApiClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use envelope::{PagedResult, RawEnvelope};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use tokio_util::sync::CancellationToken;
pub use transport::{ReqwestTransport, Transport};
pub use types::*;
