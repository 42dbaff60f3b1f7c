use crate::{
    authenticating_handler::{AuthenticatingHandler, DEFAULT_SCHEME},
    cli_credentials::CliCredentialTokenProvider,
    client::AuthenticatedClient,
    error::{Result, require_non_empty},
    token_provider::TokenProvider,
    transport::{ReqwestTransport, Transport},
};
use azure_core::credentials::TokenCredential;
use std::{fmt, sync::Arc};
use url::Url;

/// Builds [`AuthenticatedClient`]s.
///
/// By default each client gets its own [`ReqwestTransport`] and Azure CLI
/// credential.  Both can be replaced, which is how tests substitute fakes.
#[derive(Clone, Default)]
pub struct ClientFactory {
    transport: Option<Arc<dyn Transport>>,
    credential: Option<Arc<dyn TokenCredential>>,
}

impl ClientFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send every client's requests through `transport` instead of a new
    /// [`ReqwestTransport`].
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use `credential` in place of the Azure CLI for scope-based clients.
    #[must_use]
    pub fn with_credential(mut self, credential: Arc<dyn TokenCredential>) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Create a client that authenticates with a token for `scope` from the
    /// Azure CLI.
    pub fn create_azure_authenticated_client(
        &self,
        scope: &str,
        base_address: Option<Url>,
    ) -> Result<AuthenticatedClient> {
        require_non_empty("scope", scope)?;
        let provider = match &self.credential {
            Some(credential) => {
                CliCredentialTokenProvider::with_credential(scope, Arc::clone(credential))?
            }
            None => CliCredentialTokenProvider::new(scope)?,
        };
        self.create_authenticated_client(Arc::new(provider), Some(DEFAULT_SCHEME), base_address)
    }

    /// Create a client that authenticates with tokens from `provider`.
    ///
    /// `scheme` defaults to `Bearer`.
    pub fn create_authenticated_client(
        &self,
        provider: Arc<dyn TokenProvider>,
        scheme: Option<&str>,
        base_address: Option<Url>,
    ) -> Result<AuthenticatedClient> {
        let inner = match &self.transport {
            Some(transport) => Arc::clone(transport),
            None => Arc::new(ReqwestTransport::new()?),
        };
        let handler = AuthenticatingHandler::builder(provider)
            .scheme(scheme.unwrap_or(DEFAULT_SCHEME))
            .inner(inner)
            .build()?;

        let client = AuthenticatedClient::new(Arc::new(handler));
        Ok(match base_address {
            Some(base_address) => client.with_base_address(base_address),
            None => client,
        })
    }
}

impl fmt::Debug for ClientFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientFactory")
            .field("custom_transport", &self.transport.is_some())
            .field("custom_credential", &self.credential.is_some())
            .finish()
    }
}
