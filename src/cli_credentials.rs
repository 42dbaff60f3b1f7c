use crate::{
    error::{Error, Result, require_non_empty},
    token_provider::TokenProvider,
};
use azure_core::{
    credentials::{AccessToken, Secret, TokenCredential},
    error::ErrorKind,
};
use azure_identity::AzureCliCredential;
use std::{fmt, sync::Arc};
use tracing::{debug, warn};

/// Obtains bearer tokens for a single scope from the locally installed Azure CLI.
///
/// Every call shells out to `az account get-access-token`; tokens are neither
/// cached nor refreshed between calls.
pub struct CliCredentialTokenProvider {
    scope: String,
    credential: Arc<dyn TokenCredential>,
}

impl CliCredentialTokenProvider {
    /// Create a provider for `scope` backed by [`AzureCliCredential`].
    pub fn new<S>(scope: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let scope = scope.into();
        require_non_empty("scope", &scope)?;
        let credential = AzureCliCredential::new(None).map_err(|e| {
            Error::configuration(format!("unable to create the Azure CLI credential: {e}"))
        })?;
        Ok(Self { scope, credential })
    }

    /// Create a provider for `scope` backed by an arbitrary Azure credential.
    pub fn with_credential<S>(scope: S, credential: Arc<dyn TokenCredential>) -> Result<Self>
    where
        S: Into<String>,
    {
        let scope = scope.into();
        require_non_empty("scope", &scope)?;
        Ok(Self { scope, credential })
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    async fn get_access_token(&self) -> azure_core::Result<AccessToken> {
        let token = self.credential.get_token(&[self.scope.as_str()], None).await?;

        if token.token.secret().is_empty() {
            return Err(azure_core::Error::with_message(
                ErrorKind::Credential,
                "the Azure CLI returned an empty access token",
            ));
        }

        debug!(scope = %self.scope, expires_on = %token.expires_on, "acquired access token");
        Ok(token)
    }
}

impl fmt::Debug for CliCredentialTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliCredentialTokenProvider")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl TokenProvider for CliCredentialTokenProvider {
    async fn get_token(&self) -> azure_core::Result<Secret> {
        match self.get_access_token().await {
            Ok(token) => Ok(token.token),
            Err(error) => {
                warn!(scope = %self.scope, %error, "Azure CLI authentication error");
                Err(error)
            }
        }
    }
}
