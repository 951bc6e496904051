//! authfetch demo
//!
//! Fetches a bearer token, sends one JSON request and prints the result.
//!
//! Usage: `authfetch [TARGET_URL] [AUTH_URL] [METHOD]`

use authfetch::prelude::*;
use tracing_subscriber::EnvFilter;

const DEMO_ENDPOINT: &str = "https://httpbin.org/anything";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let target_url = args.next().unwrap_or_else(|| DEMO_ENDPOINT.to_string());
    let auth_url = args.next().unwrap_or_else(|| target_url.clone());
    let method = match args.next() {
        Some(method) => method.parse::<Method>()?,
        None => Method::Post,
    };

    let config = ClientConfig::new(auth_url).request_timeout(30);
    let client = RequestClient::new(config);

    let request = RequestSpec::new(method, target_url)
        .header("Content-Type", "application/json")
        .header("X-Client", "authfetch-demo")
        .field("name", "authfetch")
        .field("items", serde_json::json!([1, 2, 3]))
        .field("enabled", true);

    tracing::info!("Sending {} {}", request.method, request.url);

    let response = client.send(request).await?;

    println!("Status: {}", response.status);
    println!("Body:\n{}", response.text());
    println!("Headers:");
    let mut headers: Vec<_> = response.headers.iter().collect();
    headers.sort();
    for (name, value) in headers {
        println!("  {}: {}", name, value);
    }

    Ok(())
}
