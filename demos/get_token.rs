//! Fetch an access token from the Azure CLI, print it masked, and exercise an
//! [`ApiService`] built from the environment.
//!
//! ```text
//! API_SCOPE=api://my-api/.default API_BASE_URL=https://my-api.example.com/ \
//!     cargo run --example get_token -- api/data
//! ```

use azure_authenticated_http::{
    ApiService, CliCredentialTokenProvider, ServiceContext, TokenProvider, mask_secret,
};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let context = ServiceContext::from_env();
    let scope = context.settings().api_scope.clone();

    let provider = CliCredentialTokenProvider::new(scope)?;
    match provider.get_token().await {
        Ok(token) => println!("Token retrieved successfully: {}", mask_secret(&token)),
        Err(error) => {
            println!("Error: {error}");
            println!("Failed to retrieve token. Check if you're logged in with Azure CLI.");
            return Ok(());
        }
    }

    let service = context.api_service()?;
    println!("Using ApiService for {}", service.base_url());
    if let Some(endpoint) = env::args().nth(1) {
        call(&service, &endpoint).await;
    }
    service.dispose().await;

    Ok(())
}

async fn call(service: &ApiService, endpoint: &str) {
    match service.get_data(endpoint).await {
        Ok(body) => println!("API response: {body}"),
        Err(error) => println!("Error using HTTP client: {error}"),
    }
}
