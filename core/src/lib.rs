//! Request-construction core of a Jellyfin API client.
//!
//! # Overview
//! Turns typed method calls into `RequestDescriptor` values and hands each one
//! to an injected `RequestExecutor`. The core never touches the network: the
//! executor resolves the descriptor's handler against `ClientConfig`, attaches
//! authentication and performs the round-trip.
//!
//! # Design
//! - `ApiClient` is stateless; it holds only the executor.
//! - Per-action defaults live in the declarative `actions` table; typed
//!   option structs in `types` supply overrides by wire name.
//! - `url::build_url` guarantees exactly one `/` between the server address
//!   and the handler.
//! - Executor errors pass through unchanged; this crate only adds its own
//!   caller-contract faults (`ApiError`).

pub mod actions;
pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod types;
pub mod url;

pub use actions::{Action, Overrides, ParamDefault};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use executor::RequestExecutor;
pub use http::{HttpMethod, RequestDescriptor};
pub use types::{IdentifyOptions, ImageType, RefreshMode, RefreshOptions, RemoteImagesOptions};
pub use url::build_url;
