use azure_core::credentials::Secret;

/// A source of access tokens for outgoing requests.
///
/// Implementations are invoked once per request.  Any async closure returning
/// `azure_core::Result<Secret>` can be used directly as a provider.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait TokenProvider: Send + Sync {
    async fn get_token(&self) -> azure_core::Result<Secret>;
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl<F, Fut> TokenProvider for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = azure_core::Result<Secret>> + Send,
{
    async fn get_token(&self) -> azure_core::Result<Secret> {
        self().await
    }
}
