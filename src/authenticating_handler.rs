use crate::{
    error::{Error, Result, require_non_empty},
    token_provider::TokenProvider,
    transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport},
};
use azure_core::error::ErrorKind;
use http::{HeaderValue, header::AUTHORIZATION};
use std::{fmt, sync::Arc};
use tracing::debug;

pub const DEFAULT_SCHEME: &str = "Bearer";

/// A [`Transport`] that sets `Authorization: <scheme> <token>` on every
/// request before handing it to the inner transport.
///
/// A token is requested from the provider for each request.  Provider
/// failures are returned as [`Error::Authentication`] and the inner transport
/// is not called.
pub struct AuthenticatingHandler {
    provider: Arc<dyn TokenProvider>,
    scheme: String,
    inner: Arc<dyn Transport>,
}

impl AuthenticatingHandler {
    /// A `Bearer` handler over the default [`ReqwestTransport`].
    pub fn new(provider: Arc<dyn TokenProvider>) -> Result<Self> {
        Self::builder(provider).build()
    }

    #[must_use]
    pub fn builder(provider: Arc<dyn TokenProvider>) -> AuthenticatingHandlerBuilder {
        AuthenticatingHandlerBuilder {
            provider,
            scheme: DEFAULT_SCHEME.to_owned(),
            inner: None,
        }
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    async fn authorization(&self) -> Result<HeaderValue> {
        let token = self
            .provider
            .get_token()
            .await
            .map_err(Error::Authentication)?;
        let mut value = HeaderValue::try_from(format!("{} {}", self.scheme, token.secret()))
            .map_err(|_| {
                Error::Authentication(azure_core::Error::with_message(
                    ErrorKind::Credential,
                    "access token contains characters not allowed in a header",
                ))
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for AuthenticatingHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatingHandler")
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Transport for AuthenticatingHandler {
    async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse> {
        let authorization = self.authorization().await?;
        debug!(
            method = %request.method(),
            uri = %request.uri(),
            scheme = %self.scheme,
            "attaching authorization header"
        );
        request.headers_mut().insert(AUTHORIZATION, authorization);
        self.inner.send(request).await
    }
}

/// Builder for [`AuthenticatingHandler`].
pub struct AuthenticatingHandlerBuilder {
    provider: Arc<dyn TokenProvider>,
    scheme: String,
    inner: Option<Arc<dyn Transport>>,
}

impl AuthenticatingHandlerBuilder {
    #[must_use]
    pub fn scheme<S>(mut self, scheme: S) -> Self
    where
        S: Into<String>,
    {
        self.scheme = scheme.into();
        self
    }

    #[must_use]
    pub fn inner(mut self, inner: Arc<dyn Transport>) -> Self {
        self.inner = Some(inner);
        self
    }

    pub fn build(self) -> Result<AuthenticatingHandler> {
        require_non_empty("scheme", &self.scheme)?;
        let inner = match self.inner {
            Some(inner) => inner,
            None => Arc::new(ReqwestTransport::new()?),
        };
        Ok(AuthenticatingHandler {
            provider: self.provider,
            scheme: self.scheme,
            inner,
        })
    }
}

impl fmt::Debug for AuthenticatingHandlerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatingHandlerBuilder")
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}
