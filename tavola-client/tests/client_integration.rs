// tavola-client/tests/client_integration.rs

use tavola_client::{ClientConfig, HttpApiClient};

#[tokio::test]
async fn test_client_creation() {
    let config = ClientConfig::new("http://localhost:3000");
    let client = HttpApiClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let config = ClientConfig::new("http://localhost:3000/");
    let client = config.build_http_client().unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000");
}

#[test]
fn test_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:3000");
    assert_eq!(config.timeout, 30);

    let config = ClientConfig::new("https://tavola.example").with_timeout(5);
    assert_eq!(config.timeout, 5);
}
