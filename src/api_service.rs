use crate::{
    client::AuthenticatedClient,
    client_factory::ClientFactory,
    error::{Error, Result, require_non_empty},
    transport::HttpResponse,
};
use async_lock::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Makes authenticated calls against a fixed API base URL.
///
/// The service owns its client until [`ApiService::dispose`] is called or the
/// service is dropped.  Calls made after disposal fail with
/// [`Error::Disposed`] without sending anything.
#[derive(Debug)]
pub struct ApiService {
    base_url: Url,
    client: Mutex<Option<Arc<AuthenticatedClient>>>,
}

impl ApiService {
    pub fn new(factory: &ClientFactory, base_url: &str, scope: &str) -> Result<Self> {
        require_non_empty("base url", base_url)?;
        require_non_empty("scope", scope)?;
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::configuration(format!("invalid base url {base_url:?}: {e}")))?;

        let client = factory.create_azure_authenticated_client(scope, Some(base_url.clone()))?;
        Ok(Self {
            base_url,
            client: Mutex::new(Some(Arc::new(client))),
        })
    }

    /// Build the service without an injected factory, using the Azure CLI and
    /// the default transport.
    pub fn with_default_factory(base_url: &str, scope: &str) -> Result<Self> {
        Self::new(&ClientFactory::new(), base_url, scope)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_data(&self, endpoint: &str) -> Result<String> {
        let client = self.client().await?;
        let response = client.get(endpoint).await?;
        Self::read_text(&client, endpoint, response)
    }

    pub async fn post_data<B>(&self, endpoint: &str, body: B, content_type: &str) -> Result<String>
    where
        B: Into<Vec<u8>> + Send,
    {
        let client = self.client().await?;
        let response = client.post(endpoint, body, content_type).await?;
        Self::read_text(&client, endpoint, response)
    }

    pub async fn post_json<T>(&self, endpoint: &str, value: &T) -> Result<String>
    where
        T: Serialize + ?Sized + Sync,
    {
        let client = self.client().await?;
        let response = client.post_json(endpoint, value).await?;
        Self::read_text(&client, endpoint, response)
    }

    /// Release the underlying client.
    ///
    /// Returns `true` if this call released it and `false` if the service was
    /// already disposed.
    pub async fn dispose(&self) -> bool {
        let released = self.client.lock().await.take().is_some();
        if released {
            debug!(base_url = %self.base_url, "released api service client");
        }
        released
    }

    pub async fn is_disposed(&self) -> bool {
        self.client.lock().await.is_none()
    }

    async fn client(&self) -> Result<Arc<AuthenticatedClient>> {
        self.client
            .lock()
            .await
            .clone()
            .ok_or(Error::Disposed("ApiService"))
    }

    fn read_text(
        client: &AuthenticatedClient,
        endpoint: &str,
        response: HttpResponse,
    ) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            let url = client
                .resolve(endpoint)
                .map_or_else(|_| endpoint.to_owned(), String::from);
            debug!(%url, %status, "api call failed");
            return Err(Error::Http { status, url });
        }
        Ok(String::from_utf8_lossy(response.body()).into_owned())
    }
}
