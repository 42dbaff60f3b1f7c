use crate::{
    api_service::ApiService, client_factory::ClientFactory, error::Result, settings::ApiSettings,
};
use std::sync::Arc;

/// The services an application shares, handed explicitly to whatever needs
/// them.
///
/// The [`ClientFactory`] is shared for the life of the context while each
/// call to [`ServiceContext::api_service`] yields a new [`ApiService`].
#[derive(Debug, Clone)]
pub struct ServiceContext {
    factory: Arc<ClientFactory>,
    settings: ApiSettings,
}

impl ServiceContext {
    #[must_use]
    pub fn new(factory: Arc<ClientFactory>, settings: ApiSettings) -> Self {
        Self { factory, settings }
    }

    /// A context using the default [`ClientFactory`] and settings read from
    /// the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Arc::new(ClientFactory::new()), ApiSettings::from_env())
    }

    #[must_use]
    pub fn factory(&self) -> &Arc<ClientFactory> {
        &self.factory
    }

    #[must_use]
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    pub fn api_service(&self) -> Result<ApiService> {
        ApiService::new(
            &self.factory,
            &self.settings.api_base_url,
            &self.settings.api_scope,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        transport::{HttpRequest, HttpResponse, Transport},
    };
    use azure_core::credentials::{AccessToken, Secret, TokenCredential, TokenRequestOptions};
    use time::OffsetDateTime;

    #[derive(Debug)]
    struct StaticCredential;

    #[async_trait::async_trait]
    impl TokenCredential for StaticCredential {
        async fn get_token(
            &self,
            _scopes: &[&str],
            _options: Option<TokenRequestOptions<'_>>,
        ) -> azure_core::Result<AccessToken> {
            Ok(AccessToken {
                token: Secret::new("context-token".to_owned()),
                expires_on: OffsetDateTime::now_utc() + std::time::Duration::from_secs(600),
            })
        }
    }

    struct Ok200;

    #[async_trait::async_trait]
    impl Transport for Ok200 {
        async fn send(&self, request: HttpRequest) -> crate::Result<HttpResponse> {
            Ok(http::Response::builder().body(request.uri().to_string().into_bytes())?)
        }
    }

    fn factory() -> Arc<ClientFactory> {
        Arc::new(
            ClientFactory::new()
                .with_transport(Arc::new(Ok200))
                .with_credential(Arc::new(StaticCredential)),
        )
    }

    #[tokio::test]
    async fn builds_services_from_settings() {
        let settings = ApiSettings {
            api_base_url: "https://contoso.example/v2/".to_owned(),
            api_scope: "api://contoso/.default".to_owned(),
        };
        let context = ServiceContext::new(factory(), settings);

        let service = context.api_service().unwrap();

        assert_eq!(service.base_url().as_str(), "https://contoso.example/v2/");
        assert_eq!(
            service.get_data("items").await.unwrap(),
            "https://contoso.example/v2/items"
        );
    }

    #[tokio::test]
    async fn each_service_is_independent() {
        let context = ServiceContext::new(factory(), ApiSettings::default());

        let first = context.api_service().unwrap();
        let second = context.api_service().unwrap();
        first.dispose().await;

        assert!(first.is_disposed().await);
        assert!(!second.is_disposed().await);
    }

    #[test]
    fn invalid_settings_surface_as_configuration_errors() {
        let settings = ApiSettings {
            api_base_url: String::new(),
            api_scope: "api://contoso/.default".to_owned(),
        };
        let context = ServiceContext::new(factory(), settings);
        assert!(matches!(context.api_service(), Err(Error::Configuration(_))));
    }
}
