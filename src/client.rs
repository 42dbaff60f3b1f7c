use crate::{
    error::{Error, Result},
    transport::{HttpRequest, HttpResponse, Transport},
};
use http::{Method, header::CONTENT_TYPE};
use serde::Serialize;
use std::{fmt, sync::Arc};
use url::Url;

/// An HTTP client that owns a single transport chain, usually an
/// [`AuthenticatingHandler`](crate::AuthenticatingHandler), and resolves
/// relative endpoints against an optional base address.
pub struct AuthenticatedClient {
    transport: Arc<dyn Transport>,
    base_address: Option<Url>,
}

impl AuthenticatedClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_address: None,
        }
    }

    #[must_use]
    pub fn with_base_address(mut self, base_address: Url) -> Self {
        self.base_address = Some(base_address);
        self
    }

    #[must_use]
    pub fn base_address(&self) -> Option<&Url> {
        self.base_address.as_ref()
    }

    /// Resolve `endpoint` against the base address.
    ///
    /// Relative references follow URL resolution rules, so `"items"` is
    /// appended to a base ending in `/` while `"/items"` replaces its path.
    /// Without a base address `endpoint` must be absolute.
    pub fn resolve(&self, endpoint: &str) -> Result<Url> {
        Ok(match &self.base_address {
            Some(base) => base.join(endpoint)?,
            None => Url::parse(endpoint)?,
        })
    }

    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.transport.send(request).await
    }

    pub async fn get(&self, endpoint: &str) -> Result<HttpResponse> {
        let request = http::Request::builder()
            .method(Method::GET)
            .uri(self.resolve(endpoint)?.as_str())
            .body(Vec::new())?;
        self.send(request).await
    }

    pub async fn post<B>(&self, endpoint: &str, body: B, content_type: &str) -> Result<HttpResponse>
    where
        B: Into<Vec<u8>> + Send,
    {
        let request = http::Request::builder()
            .method(Method::POST)
            .uri(self.resolve(endpoint)?.as_str())
            .header(CONTENT_TYPE, content_type)
            .body(body.into())?;
        self.send(request).await
    }

    pub async fn post_json<T>(&self, endpoint: &str, value: &T) -> Result<HttpResponse>
    where
        T: Serialize + ?Sized + Sync,
    {
        let body = serde_json::to_vec(value).map_err(Error::Serialization)?;
        self.post(endpoint, body, "application/json").await
    }
}

impl fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("base_address", &self.base_address)
            .finish_non_exhaustive()
    }
}
