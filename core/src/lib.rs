//! Client-side facade for a remote "clients" REST resource.
//!
//! # Overview
//! Two layers:
//! - `ClientsApi` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network (host-does-IO pattern).
//! - `ClientService` drives one `Transport` round-trip per call and applies
//!   the per-operation failure policy: error dialog through an `Alerter`,
//!   navigation through a `Navigator`, a `tracing` error event, then the
//!   error goes back to the caller.
//!
//! # Design
//! - Records are passed through untouched; see `types`.
//! - No retry, caching or pagination logic beyond passing the page number on.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;
pub mod ui;

pub use api::ClientsApi;
pub use config::{ClientsConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::ClientService;
pub use transport::{ReqwestTransport, Transport};
pub use types::{Client, ServerResponse};
pub use ui::{Alert, AlertIcon, Alerter, LogAlerter, LogNavigator, Navigator};
