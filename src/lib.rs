//! # Azure Authenticated HTTP
//!
//! `azure-authenticated-http` builds HTTP clients that attach an Azure access
//! token to every outgoing request.  Tokens come from the locally installed
//! [Azure CLI](https://learn.microsoft.com/cli/azure/) or from any
//! [`TokenProvider`].
//!
//! ## Modules
//!
//! - `token_provider`: The [`TokenProvider`] capability.  Async closures are providers.
//! - `cli_credentials`: [`CliCredentialTokenProvider`], which asks the Azure CLI for a token on every call.
//! - `authenticating_handler`: [`AuthenticatingHandler`], a transport layer that sets the `Authorization` header.
//! - `transport`: The [`Transport`] seam and the default `reqwest`-backed [`ReqwestTransport`].
//! - `client`: [`AuthenticatedClient`], a client over an authenticating transport with an optional base address.
//! - `client_factory`: [`ClientFactory`], which assembles the pieces above.
//! - `api_service`: [`ApiService`], GET/POST helpers against a fixed base URL.
//! - `mask`: Token masking for display.
//! - `settings` / `context`: Configuration and the explicit [`ServiceContext`] shared across an application.
//!

#![forbid(unsafe_code)]
#![deny(
    clippy::indexing_slicing,
    clippy::manual_assert,
    clippy::panic,
    clippy::expect_used,
    clippy::unwrap_used
)]

pub mod api_service;
pub mod authenticating_handler;
pub mod cli_credentials;
pub mod client;
pub mod client_factory;
pub mod context;
pub mod error;
pub mod mask;
pub mod settings;
pub mod token_provider;
pub mod transport;

pub use api_service::ApiService;
pub use authenticating_handler::AuthenticatingHandler;
pub use cli_credentials::CliCredentialTokenProvider;
pub use client::AuthenticatedClient;
pub use client_factory::ClientFactory;
pub use context::ServiceContext;
pub use error::{Error, Result};
pub use mask::{mask_secret, mask_token};
pub use settings::ApiSettings;
pub use token_provider::TokenProvider;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
