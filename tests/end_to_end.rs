#![allow(clippy::unwrap_used)]

use azure_authenticated_http::{
    ApiService, ClientFactory, Error, HttpRequest, HttpResponse, Result, TokenProvider, Transport,
};
use azure_core::credentials::{AccessToken, Secret, TokenCredential, TokenRequestOptions};
use futures::future::ready;
use http::{StatusCode, header::AUTHORIZATION};
use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use time::OffsetDateTime;

#[derive(Debug)]
struct FixedCredential(&'static str);

#[async_trait::async_trait]
impl TokenCredential for FixedCredential {
    async fn get_token(
        &self,
        _scopes: &[&str],
        _options: Option<TokenRequestOptions<'_>>,
    ) -> azure_core::Result<AccessToken> {
        Ok(AccessToken {
            token: Secret::new(self.0.to_owned()),
            expires_on: OffsetDateTime::now_utc() + Duration::from_secs(3600),
        })
    }
}

/// Answers every request with `status` and the `Authorization` header it saw.
struct EchoAuthorization {
    status: StatusCode,
    calls: AtomicUsize,
}

impl EchoAuthorization {
    fn new(status: StatusCode) -> Arc<Self> {
        Arc::new(Self {
            status,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl Transport for EchoAuthorization {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let seen = request
            .headers()
            .get(AUTHORIZATION)
            .map(|v| v.as_bytes().to_vec())
            .unwrap_or_default();
        let mut body = b"authorization: ".to_vec();
        body.extend(seen);
        Ok(http::Response::builder().status(self.status).body(body)?)
    }
}

fn factory(transport: Arc<EchoAuthorization>) -> ClientFactory {
    ClientFactory::new()
        .with_transport(transport)
        .with_credential(Arc::new(FixedCredential("abc123")))
}

#[tokio::test]
async fn get_data_carries_the_bearer_token() {
    let transport = EchoAuthorization::new(StatusCode::OK);
    let service = ApiService::new(
        &factory(transport.clone()),
        "https://api.example.com/",
        "api://example-api/.default",
    )
    .unwrap();

    let body = service.get_data("/x").await.unwrap();

    assert!(body.contains("Bearer abc123"), "{body}");
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn custom_providers_flow_through_the_factory() {
    let transport = EchoAuthorization::new(StatusCode::OK);
    let provider: Arc<dyn TokenProvider> =
        Arc::new(|| ready(Ok::<_, azure_core::Error>(Secret::new("abc123".to_owned()))));
    let client = factory(transport)
        .create_authenticated_client(
            provider,
            None,
            Some(url::Url::parse("https://api.example.com/").unwrap()),
        )
        .unwrap();

    let response = client.get("/x").await.unwrap();

    assert_eq!(response.body(), b"authorization: Bearer abc123");
}

#[tokio::test]
async fn not_found_is_an_http_error() {
    let service = ApiService::new(
        &factory(EchoAuthorization::new(StatusCode::NOT_FOUND)),
        "https://api.example.com/",
        "api://example-api/.default",
    )
    .unwrap();

    let result = service.get_data("/x").await;

    assert!(matches!(result, Err(ref e @ Error::Http { .. }) if e.status() == Some(StatusCode::NOT_FOUND)));
}

#[tokio::test]
async fn disposed_services_never_reach_the_transport() {
    let transport = EchoAuthorization::new(StatusCode::OK);
    let service = ApiService::new(
        &factory(transport.clone()),
        "https://api.example.com/",
        "api://example-api/.default",
    )
    .unwrap();

    service.dispose().await;
    service.dispose().await;

    assert!(matches!(service.get_data("/x").await, Err(Error::Disposed(_))));
    assert!(matches!(
        service.post_data("/x", "{}", "application/json").await,
        Err(Error::Disposed(_))
    ));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_configuration_fails_at_construction() {
    let factory = factory(EchoAuthorization::new(StatusCode::OK));

    assert!(matches!(
        factory.create_azure_authenticated_client("", None),
        Err(Error::Configuration(_))
    ));
    assert!(matches!(
        ApiService::new(&factory, "", "api://example-api/.default"),
        Err(Error::Configuration(_))
    ));
    assert!(matches!(
        ApiService::new(&factory, "https://api.example.com/", ""),
        Err(Error::Configuration(_))
    ));
}
